//! Piecewise-linear keyframe curves.
//!
//! A curve is an ordered list of `(input, output)` control points with
//! strictly increasing inputs. Sampling clamps at both ends and blends
//! linearly between the bracketing points otherwise.

use thiserror::Error;

use super::Animatable;

/// Rejected keyframe configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyframeError {
    #[error("keyframe length mismatch: {inputs} inputs but {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("a keyframe curve needs at least 2 control points, got {0}")]
    TooFewPoints(usize),
    #[error("keyframe inputs must be strictly increasing (at index {index})")]
    NotIncreasing { index: usize },
    #[error("keyframe input at index {index} is not finite")]
    NonFinite { index: usize },
}

fn validate(inputs: &[f32], outputs: usize) -> Result<(), KeyframeError> {
    if inputs.len() != outputs {
        return Err(KeyframeError::LengthMismatch {
            inputs: inputs.len(),
            outputs,
        });
    }
    if inputs.len() < 2 {
        return Err(KeyframeError::TooFewPoints(inputs.len()));
    }
    if let Some(index) = inputs.iter().position(|x| !x.is_finite()) {
        return Err(KeyframeError::NonFinite { index });
    }
    if let Some(i) = inputs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(KeyframeError::NotIncreasing { index: i + 1 });
    }
    Ok(())
}

/// Sample an already validated curve
fn sample<V: Animatable>(t: f32, inputs: &[f32], outputs: &[V]) -> V {
    let last = inputs.len() - 1;
    if t.is_nan() || t <= inputs[0] {
        return outputs[0].clone();
    }
    if t >= inputs[last] {
        return outputs[last].clone();
    }

    // First control point strictly above t; t > inputs[0] so i >= 1
    let i = inputs.partition_point(|&x| x <= t);
    let (x0, x1) = (inputs[i - 1], inputs[i]);
    V::lerp(&outputs[i - 1], &outputs[i], (t - x0) / (x1 - x0))
}

/// One-shot interpolation over parallel control-point arrays.
///
/// Returns an error instead of truncating or wrapping when the arrays do
/// not describe a valid curve.
pub fn interpolate<V: Animatable>(
    t: f32,
    inputs: &[f32],
    outputs: &[V],
) -> Result<V, KeyframeError> {
    validate(inputs, outputs.len())?;
    Ok(sample(t, inputs, outputs))
}

/// Validated keyframe curve
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<V: Animatable> {
    inputs: Vec<f32>,
    outputs: Vec<V>,
}

impl<V: Animatable> Keyframes<V> {
    /// Build a curve, failing fast on malformed control points
    pub fn new(inputs: &[f32], outputs: &[V]) -> Result<Self, KeyframeError> {
        validate(inputs, outputs.len())?;
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        })
    }

    pub fn sample(&self, t: f32) -> V {
        sample(t, &self.inputs, &self.outputs)
    }

    pub fn inputs(&self) -> &[f32] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[V] {
        &self.outputs
    }
}
