/// Strength of a haptic impact
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Fire-and-forget haptic feedback device.
///
/// Implementations must return promptly; the controller calls this
/// synchronously from inside a toggle.
pub trait Haptics {
    fn impact(&self, style: ImpactStyle);
}

/// Haptics sink for platforms without a feedback device
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&self, style: ImpactStyle) {
        log::trace!("haptic impact {:?} dropped (no device)", style);
    }
}

impl<F: Fn(ImpactStyle)> Haptics for F {
    fn impact(&self, style: ImpactStyle) {
        self(style)
    }
}
