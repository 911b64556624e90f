use super::config::{AttributeWeights, BalanceConfig, REQUIRED_ATTRIBUTES};

/// Validate a weight table at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &AttributeWeights) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = weights
        .problems()
        .into_iter()
        .map(|p| format!("weights: {}", p))
        .collect();

    for (name, _) in weights.iter() {
        if !REQUIRED_ATTRIBUTES.contains(&name) {
            errors.push(format!(
                "weights.{}: unknown attribute (expected one of {})",
                name,
                REQUIRED_ATTRIBUTES.join(", ")
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate balancing knobs.
pub fn validate_tuning(config: &BalanceConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let p = config.tie_break_probability;
    if !(0.0..=1.0).contains(&p) {
        errors.push(format!(
            "balance.tie_break_probability: must be between 0 and 1 (got {})",
            p
        ));
    }

    let window = config.closeness_window;
    if !window.is_finite() || window < 0.0 {
        errors.push(format!(
            "balance.closeness_window: must be a non-negative number (got {})",
            window
        ));
    }

    if config.outlier_threshold < 0 {
        errors.push(format!(
            "balance.outlier_threshold: must be non-negative (got {})",
            config.outlier_threshold
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
