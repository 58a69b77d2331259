use thiserror::Error;

use crate::config::{parse_iso_date, FieldOverride, MockConfig};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Inverted range for {field}: {min} is greater than {max}")]
    InvertedRange {
        field: String,
        min: String,
        max: String,
    },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_operations(config) {
            errors.extend(e);
        }

        // Sorted so repeated runs report in the same order
        let mut type_names: Vec<&String> = config.types.keys().collect();
        type_names.sort();

        for type_name in type_names {
            if type_name.is_empty() {
                errors.push(ValidationError::MissingField("types.<name>".to_string()));
                continue;
            }
            let type_config = &config.types[type_name];
            let mut field_names: Vec<&String> = type_config.fields.keys().collect();
            field_names.sort();

            for field_name in field_names {
                let path = format!("types.{}.fields.{}", type_name, field_name);
                if field_name.is_empty() {
                    errors.push(ValidationError::MissingField(format!(
                        "types.{}.fields.<name>",
                        type_name
                    )));
                    continue;
                }
                if let Err(e) = Self::validate_field(&path, &type_config.fields[field_name]) {
                    errors.extend(e);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_operations(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = config
            .operations
            .keys()
            .filter(|name| name.is_empty())
            .map(|_| ValidationError::MissingField("operations.<name>".to_string()))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_field(path: &str, field: &FieldOverride) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (key, bound) in [("min", field.min), ("max", field.max)] {
            if let Some(bound) = bound {
                if !bound.is_finite() {
                    errors.push(ValidationError::InvalidValue {
                        field: format!("{}.{}", path, key),
                        reason: "Numeric bounds must be finite".to_string(),
                    });
                }
            }
        }

        if let (Some(min), Some(max)) = (field.min, field.max) {
            if min > max {
                errors.push(ValidationError::InvertedRange {
                    field: format!("{}.min/max", path),
                    min: min.to_string(),
                    max: max.to_string(),
                });
            } else if min.is_finite() && max.is_finite() && !(max - min).is_finite() {
                errors.push(ValidationError::InvalidValue {
                    field: format!("{}.min/max", path),
                    reason: "Numeric range is wider than the largest float".to_string(),
                });
            }
        }

        if let (Some(min), Some(max)) = (field.array_min, field.array_max) {
            if min > max {
                errors.push(ValidationError::InvertedRange {
                    field: format!("{}.arrayMin/arrayMax", path),
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }

        let min_date = Self::validate_date(path, "minDate", field.min_date.as_deref(), &mut errors);
        let max_date = Self::validate_date(path, "maxDate", field.max_date.as_deref(), &mut errors);
        if let (Some(min), Some(max)) = (min_date, max_date) {
            if min > max {
                errors.push(ValidationError::InvertedRange {
                    field: format!("{}.minDate/maxDate", path),
                    min: min.to_rfc3339(),
                    max: max.to_rfc3339(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_date(
        path: &str,
        key: &str,
        raw: Option<&str>,
        errors: &mut Vec<ValidationError>,
    ) -> Option<chrono::DateTime<chrono::Utc>> {
        let raw = raw?;
        let parsed = parse_iso_date(raw);
        if parsed.is_none() {
            errors.push(ValidationError::InvalidValue {
                field: format!("{}.{}", path, key),
                reason: format!("'{}' is not an ISO-8601 date", raw),
            });
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(field: FieldOverride) -> MockConfig {
        let mut config = MockConfig::default();
        config.set_field_override("Widget", "price", field);
        config
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(ConfigValidator::validate(&MockConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_overrides() {
        let config = config_with(FieldOverride {
            min: Some(1.0),
            max: Some(2.0),
            min_date: Some("2024-01-01".to_string()),
            max_date: Some("2024-12-31T23:59:59Z".to_string()),
            array_min: Some(0),
            array_max: Some(0),
            value: None,
        });
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_inverted_numeric_range() {
        let errors = ConfigValidator::validate(&config_with(FieldOverride::with_range(10.0, 5.0)))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Inverted range for types.Widget.fields.price.min/max: 10 is greater than 5"
        );
    }

    #[test]
    fn test_inverted_array_range() {
        let errors = ConfigValidator::validate(&config_with(FieldOverride::with_array_len(3, 1)))
            .unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::InvertedRange { field, .. } if field.ends_with("arrayMin/arrayMax")
        ));
    }

    #[test]
    fn test_bad_and_inverted_dates() {
        let errors = ConfigValidator::validate(&config_with(FieldOverride {
            min_date: Some("yesterday".to_string()),
            ..FieldOverride::default()
        }))
        .unwrap_err();
        assert!(matches!(&errors[0], ValidationError::InvalidValue { field, .. } if field.ends_with("minDate")));

        let errors = ConfigValidator::validate(&config_with(FieldOverride {
            min_date: Some("2025-01-01".to_string()),
            max_date: Some("2024-01-01".to_string()),
            ..FieldOverride::default()
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::InvertedRange { .. }));
    }

    #[test]
    fn test_non_finite_bound() {
        let errors = ConfigValidator::validate(&config_with(FieldOverride {
            max: Some(f64::INFINITY),
            ..FieldOverride::default()
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_overflowing_numeric_range() {
        let errors = ConfigValidator::validate(&config_with(FieldOverride::with_range(f64::MIN, f64::MAX)))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidValue { field, .. } if field.ends_with("price.min/max")
        ));

        let wide_but_fine = config_with(FieldOverride::with_range(-1.0e307, 1.0e307));
        assert!(ConfigValidator::validate(&wide_but_fine).is_ok());
    }

    #[test]
    fn test_empty_names() {
        let mut config = MockConfig::default();
        config.set_operation_enabled("", false);
        config.set_field_override("", "price", FieldOverride::default());
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
