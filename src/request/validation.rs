use super::params::ParameterSet;
use crate::endpoint::EndpointSpec;
use crate::error::{OsuApiError, Result};

/// Checks `params` against `spec`, reporting the first violation only.
///
/// Required names are checked first, in declared order, then supplied names in
/// supply order.
pub fn validate(spec: &EndpointSpec, params: &ParameterSet) -> Result<()> {
    if let Some(name) = spec.required().iter().find(|name| !params.contains(name)) {
        return Err(OsuApiError::missing(name.as_str()));
    }

    if let Some((name, _)) = params.present().find(|(name, _)| !spec.is_allowed(name)) {
        return Err(OsuApiError::unknown(name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterErrorKind;

    fn spec() -> EndpointSpec {
        EndpointSpec::new("get_scores", ["m"], ["m", "u"]).unwrap()
    }

    #[test]
    fn missing_required_is_reported_before_unknown() {
        let params = ParameterSet::new().with("bogus", 1);
        let err = validate(&spec(), &params).unwrap_err();
        assert_eq!(err.parameter_kind(), Some(ParameterErrorKind::MissingRequired));
    }

    #[test]
    fn omitted_required_counts_as_missing() {
        let params = ParameterSet::new().omit("m").with("u", "x");
        assert!(validate(&spec(), &params).is_err());
    }

    #[test]
    fn omitted_unknown_is_ignored() {
        let params = ParameterSet::new().with("m", 0).omit("bogus");
        assert!(validate(&spec(), &params).is_ok());
    }
}
