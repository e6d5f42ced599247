use bitflags::bitflags;

bitflags! {
    /// Root inputs that changed between two samples
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// The scalar progress value moved
        const PROGRESS       = 0b001;
        /// `is_liking` flipped
        const LIKING         = 0b010;
        /// `show_particles` flipped
        const SHOW_PARTICLES = 0b100;
    }
}

/// The root of the derived-value graph: everything a frame depends on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootInputs {
    pub progress: f32,
    pub is_liking: bool,
    pub show_particles: bool,
}

impl RootInputs {
    /// Inputs that differ from `prev`; everything is dirty on the first sample
    pub fn changes_since(&self, prev: Option<&RootInputs>) -> ChangeFlags {
        let Some(prev) = prev else {
            return ChangeFlags::all();
        };
        let mut flags = ChangeFlags::empty();
        if self.progress != prev.progress {
            flags |= ChangeFlags::PROGRESS;
        }
        if self.is_liking != prev.is_liking {
            flags |= ChangeFlags::LIKING;
        }
        if self.show_particles != prev.show_particles {
            flags |= ChangeFlags::SHOW_PARTICLES;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: RootInputs = RootInputs {
        progress: 0.0,
        is_liking: false,
        show_particles: false,
    };

    #[test]
    fn test_first_sample_dirties_everything() {
        assert_eq!(IDLE.changes_since(None), ChangeFlags::all());
    }

    #[test]
    fn test_unchanged_inputs_are_clean() {
        assert!(IDLE.changes_since(Some(&IDLE)).is_empty());
    }

    #[test]
    fn test_reports_only_changed_inputs() {
        let next = RootInputs {
            progress: 0.1,
            show_particles: true,
            ..IDLE
        };
        assert_eq!(
            next.changes_since(Some(&IDLE)),
            ChangeFlags::PROGRESS | ChangeFlags::SHOW_PARTICLES
        );
    }
}
