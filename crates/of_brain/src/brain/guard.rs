//! Validity Guard
//!
//! 예측기 내부 상태가 퇴화(가중치 없음, 모양 불일치, NaN/Inf)했는지 판정.
//! 패닉 없이 동작하며, 학습 전/후 두 번 호출된다.

use super::features::INPUT_SIZE;
use super::output::OUTPUT_SIZE;
use super::predictor::Predictor;
use crate::error::{BrainError, Result};

/// 중간값 입력 (모든 특성 0.5)
const PROBE_INPUT: [f32; INPUT_SIZE] = [0.5; INPUT_SIZE];

/// 첫 번째로 실패한 조건을 에러로 반환
pub fn validity_report<P: Predictor + ?Sized>(net: &P) -> Result<()> {
    let shapes = net.layer_shapes()?;
    let first = shapes.first().ok_or(BrainError::Untrained)?;

    if first.inputs != INPUT_SIZE {
        return Err(BrainError::ShapeMismatch { context: "input layer", expected: INPUT_SIZE, found: first.inputs });
    }
    for pair in shapes.windows(2) {
        if pair[1].inputs != pair[0].outputs {
            return Err(BrainError::ShapeMismatch {
                context: "layer chain",
                expected: pair[0].outputs,
                found: pair[1].inputs,
            });
        }
    }
    let last_outputs = shapes[shapes.len() - 1].outputs;
    if last_outputs != OUTPUT_SIZE {
        return Err(BrainError::ShapeMismatch { context: "output layer", expected: OUTPUT_SIZE, found: last_outputs });
    }

    if let Some(layer) = net.first_non_finite_layer() {
        return Err(BrainError::NonFiniteParameters { layer });
    }

    let probe = net.run(&PROBE_INPUT)?;
    if probe.len() != OUTPUT_SIZE {
        return Err(BrainError::ShapeMismatch { context: "probe output", expected: OUTPUT_SIZE, found: probe.len() });
    }
    if let Some(channel) = probe.iter().position(|v| !v.is_finite()) {
        return Err(BrainError::NonFiniteOutput { channel });
    }
    Ok(())
}

pub fn is_valid<P: Predictor + ?Sized>(net: &P) -> bool {
    validity_report(net).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::network::{Activation, FeedForwardFactory, FeedForwardNet};
    use crate::brain::predictor::PredictorFactory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fresh_network_is_valid() {
        let net = FeedForwardFactory::default().create();
        assert!(is_valid(&net));
    }

    #[test]
    fn test_untrained_is_invalid() {
        let net = FeedForwardNet::untrained();
        assert!(matches!(validity_report(&net), Err(BrainError::Untrained)));
    }

    #[test]
    fn test_nan_weight_is_invalid() {
        let mut net = FeedForwardFactory::default().create();
        net.layers[2].biases[0] = f32::NAN;
        assert!(matches!(validity_report(&net), Err(BrainError::NonFiniteParameters { layer: 2 })));
    }

    #[test]
    fn test_infinite_weight_is_invalid() {
        let mut net = FeedForwardFactory::default().create();
        net.layers[0].weights[(3, 4)] = f32::INFINITY;
        assert!(!is_valid(&net));
    }

    #[test]
    fn test_wrong_input_width_is_invalid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let net = FeedForwardNet::new(INPUT_SIZE + 1, &[4], OUTPUT_SIZE, Activation::Sigmoid, Activation::Tanh, &mut rng);
        assert!(matches!(
            validity_report(&net),
            Err(BrainError::ShapeMismatch { context: "input layer", .. })
        ));
    }

    #[test]
    fn test_wrong_output_width_is_invalid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let net = FeedForwardNet::new(INPUT_SIZE, &[4], 3, Activation::Sigmoid, Activation::Tanh, &mut rng);
        assert!(matches!(
            validity_report(&net),
            Err(BrainError::ShapeMismatch { context: "output layer", .. })
        ));
    }

    #[test]
    fn test_truncated_bias_is_invalid() {
        let mut net = FeedForwardFactory::default().create();
        net.layers[1].biases = nalgebra::DVector::zeros(2);
        assert!(matches!(validity_report(&net), Err(BrainError::ShapeMismatch { context: "bias", .. })));
    }
}
