//! Content-based fingerprints for input records.
//!
//! The solver is pure, so a result is fully determined by the input tuple
//! and the solver version; callers that want to cache results can key on
//! this hash.

use sha2::{Digest, Sha256};

use hv_model::SimInputs;

pub fn input_fingerprint(inputs: &SimInputs, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let inputs_json = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());
    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_model::{CompressorTech, SOLVER_VERSION};

    fn inputs() -> SimInputs {
        SimInputs::new(
            35.0,
            22.0,
            1500.0,
            50.0,
            CompressorTech::VariableDisplacement,
        )
        .unwrap()
    }

    #[test]
    fn fingerprint_is_stable() {
        let a = input_fingerprint(&inputs(), SOLVER_VERSION);
        let b = input_fingerprint(&inputs(), SOLVER_VERSION);
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_differs_for_different_inputs() {
        let base = inputs();
        let a = input_fingerprint(&base, SOLVER_VERSION);
        let b = input_fingerprint(&base.with_ambient(36.0), SOLVER_VERSION);
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_differs_across_solver_versions() {
        let base = inputs();
        let a = input_fingerprint(&base, "2.1");
        let b = input_fingerprint(&base, "2.2");
        assert_ne!(a, b);
    }
}
