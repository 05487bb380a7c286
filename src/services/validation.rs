//! Field rules shared by every service.
//!
//! Lengths are counted in characters, not bytes, so accented names such as
//! "Botiquín" are measured the way users type them.

use crate::entities::{firefighter, resource};
use crate::errors::ServiceError;

/// Largest value representable with nine decimal digits
pub const MAX_NINE_DIGITS: i64 = 999_999_999;

/// A bounded, required text field and the messages reported for it
#[derive(Debug, Clone, Copy)]
pub struct TextField {
    pub max: usize,
    pub required: &'static str,
    pub too_long: &'static str,
}

pub const RESOURCE_NAME: TextField = TextField {
    max: 50,
    required: "El nombre del recurso es requerido",
    too_long: "El nombre no puede exceder los 50 caracteres",
};

pub const RESOURCE_STATUS: TextField = TextField {
    max: 50,
    required: "El estado del recurso es requerido",
    too_long: "El estado no puede exceder los 50 caracteres",
};

pub const VEHICLE_BRAND: TextField = TextField {
    max: 50,
    required: "La marca es requerida",
    too_long: "La marca no puede exceder los 50 caracteres",
};

pub const VEHICLE_MODEL: TextField = TextField {
    max: 50,
    required: "El modelo es requerido",
    too_long: "El modelo no puede exceder los 50 caracteres",
};

pub const VEHICLE_PLATE: TextField = TextField {
    max: 6,
    required: "La patente es requerida",
    too_long: "La patente no puede exceder los 6 caracteres",
};

pub const VEHICLE_DRIVER: TextField = TextField {
    max: 50,
    required: "El conductor es requerido",
    too_long: "El conductor no puede exceder los 50 caracteres",
};

pub const VEHICLE_STATUS: TextField = TextField {
    max: 50,
    required: "El estado del vehiculo es requerido",
    too_long: "El estado no puede exceder los 50 caracteres",
};

pub const REQUEST_TITLE: TextField = TextField {
    max: 50,
    required: "El titulo es requerido",
    too_long: "El titulo no puede exceder los 50 caracteres",
};

pub const REQUEST_DETAIL: TextField = TextField {
    max: 400,
    required: "El Detalle es requerido",
    too_long: "El Detalle no puede exceder los 400 caracteres",
};

pub const REQUEST_STATUS: TextField = TextField {
    max: 50,
    required: "El estado de la solicitud es requerido",
    too_long: "El estado no puede exceder los 50 caracteres",
};

pub const FIREFIGHTER_NAME: TextField = TextField {
    max: 50,
    required: "El nombre del bombero es requerido",
    too_long: "El nombre no puede exceder los 50 caracteres",
};

pub const FIREFIGHTER_PATERNAL: TextField = TextField {
    max: 50,
    required: "El apellido paterno es requerido",
    too_long: "El apellido paterno no puede exceder los 50 caracteres",
};

pub const FIREFIGHTER_MATERNAL: TextField = TextField {
    max: 50,
    required: "El apellido materno es requerido",
    too_long: "El apellido materno no puede exceder los 50 caracteres",
};

impl TextField {
    /// Rejects absent or blank values and values over the limit
    pub fn require(&self, value: Option<&str>) -> Result<String, ServiceError> {
        match value {
            Some(v) if !v.trim().is_empty() => {
                self.check_length(v)?;
                Ok(v.to_string())
            }
            _ => Err(ServiceError::invalid(self.required)),
        }
    }

    /// Length check for a value supplied on update; `None` means "keep"
    pub fn optional(&self, value: Option<&str>) -> Result<Option<String>, ServiceError> {
        value.map(|v| self.require(Some(v))).transpose()
    }

    fn check_length(&self, value: &str) -> Result<(), ServiceError> {
        if value.chars().count() > self.max {
            return Err(ServiceError::invalid(self.too_long));
        }
        Ok(())
    }
}

/// Category names share one rule; `label` is "Tipo Recurso" or "Tipo Vehiculo"
pub fn validate_category_name(label: &str, name: Option<&str>) -> Result<String, ServiceError> {
    match name {
        Some(v) if !v.trim().is_empty() => {
            if v.chars().count() > 50 {
                return Err(ServiceError::invalid(
                    "El nombre no puede exceder los 50 caracteres",
                ));
            }
            Ok(v.to_string())
        }
        _ => Err(ServiceError::invalid(format!(
            "El nombre del {} es requerido",
            label
        ))),
    }
}

/// Positive and at most nine digits
pub fn validate_quantity(quantity: Option<i64>) -> Result<i32, ServiceError> {
    let quantity = quantity.ok_or_else(|| ServiceError::invalid("La Cantidad es requerida"))?;
    if quantity <= 0 {
        return Err(ServiceError::invalid(
            "La Cantidad debe ser un número positivo",
        ));
    }
    if quantity > MAX_NINE_DIGITS {
        return Err(ServiceError::invalid(
            "El valor cantidad excede máximo de caracteres (9)",
        ));
    }
    i32::try_from(quantity).map_err(|_| {
        ServiceError::invalid("El valor cantidad excede máximo de caracteres (9)")
    })
}

/// Positive and at most nine digits
pub fn validate_phone(phone: i64) -> Result<(), ServiceError> {
    if phone <= 0 {
        return Err(ServiceError::invalid(
            "El Telefono debe ser un número positivo",
        ));
    }
    if phone > MAX_NINE_DIGITS {
        return Err(ServiceError::invalid(
            "El valor telefono excede máximo de caracteres (9)",
        ));
    }
    Ok(())
}

/// Field rules of a resource: quantity, name and status.
///
/// The category is checked by the caller, which has to load it anyway.
pub fn validate_resource(resource: &resource::Model) -> Result<(), ServiceError> {
    validate_quantity(Some(i64::from(resource.quantity)))?;
    RESOURCE_NAME.require(Some(&resource.name))?;
    RESOURCE_STATUS.require(Some(&resource.status))?;
    Ok(())
}

/// Field rules of a firefighter. Phone uniqueness needs the store and is
/// checked by the caller.
pub fn validate_firefighter(firefighter: &firefighter::Model) -> Result<(), ServiceError> {
    validate_phone(firefighter.phone)?;
    FIREFIGHTER_NAME.require(Some(&firefighter.first_name))?;
    FIREFIGHTER_PATERNAL.require(Some(&firefighter.paternal_surname))?;
    FIREFIGHTER_MATERNAL.require(Some(&firefighter.maternal_surname))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn message(err: ServiceError) -> String {
        match err {
            ServiceError::ValidationError(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn missing_text_is_required(#[case] value: Option<&str>) {
        let err = RESOURCE_NAME.require(value).unwrap_err();
        assert_eq!(message(err), "El nombre del recurso es requerido");
    }

    #[rstest]
    #[case(REQUEST_TITLE, 50)]
    #[case(REQUEST_DETAIL, 400)]
    #[case(VEHICLE_PLATE, 6)]
    #[case(RESOURCE_STATUS, 50)]
    fn text_is_bounded_at_its_limit(#[case] field: TextField, #[case] max: usize) {
        let at_limit = "a".repeat(max);
        assert_eq!(field.require(Some(&at_limit)).unwrap(), at_limit);

        let over = "a".repeat(max + 1);
        assert_eq!(message(field.require(Some(&over)).unwrap_err()), field.too_long);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "ñ".repeat(50);
        assert!(accented.len() > 50);
        assert!(RESOURCE_NAME.require(Some(&accented)).is_ok());
    }

    #[test]
    fn optional_text_keeps_absent_values() {
        assert_eq!(REQUEST_TITLE.optional(None).unwrap(), None);
        assert_eq!(
            REQUEST_TITLE.optional(Some("Incendio")).unwrap(),
            Some("Incendio".to_string())
        );
        assert_matches!(
            REQUEST_TITLE.optional(Some(&"x".repeat(51))),
            Err(ServiceError::ValidationError(_))
        );
    }

    #[rstest]
    #[case(0, "La Cantidad debe ser un número positivo")]
    #[case(-5, "La Cantidad debe ser un número positivo")]
    #[case(1_000_000_000, "El valor cantidad excede máximo de caracteres (9)")]
    fn quantity_out_of_range_is_rejected(#[case] quantity: i64, #[case] expected: &str) {
        assert_eq!(message(validate_quantity(Some(quantity)).unwrap_err()), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    #[case(999_999_999)]
    fn quantity_in_range_is_accepted(#[case] quantity: i64) {
        assert_eq!(validate_quantity(Some(quantity)).unwrap() as i64, quantity);
    }

    #[test]
    fn quantity_is_required() {
        assert_matches!(validate_quantity(None), Err(ServiceError::ValidationError(_)));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(1_234_567_890)]
    fn phone_out_of_range_is_rejected(#[case] phone: i64) {
        assert_matches!(validate_phone(phone), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn category_name_rules() {
        assert_eq!(
            message(validate_category_name("Tipo Recurso", None).unwrap_err()),
            "El nombre del Tipo Recurso es requerido"
        );
        assert_eq!(
            message(validate_category_name("Tipo Vehiculo", Some(&"b".repeat(51))).unwrap_err()),
            "El nombre no puede exceder los 50 caracteres"
        );
        assert_eq!(
            validate_category_name("Tipo Recurso", Some("Rescate")).unwrap(),
            "Rescate"
        );
    }

    #[test]
    fn resource_rules_cover_quantity_name_and_status() {
        let valid = resource::Model {
            id: 1,
            name: "Botiquín".into(),
            quantity: 10,
            status: "Disponible".into(),
            resource_type_id: 1,
        };
        assert!(validate_resource(&valid).is_ok());

        let blank_status = resource::Model {
            status: " ".into(),
            ..valid.clone()
        };
        assert_eq!(
            message(validate_resource(&blank_status).unwrap_err()),
            "El estado del recurso es requerido"
        );

        let no_quantity = resource::Model {
            quantity: 0,
            ..valid
        };
        assert_matches!(
            validate_resource(&no_quantity),
            Err(ServiceError::ValidationError(_))
        );
    }

    #[test]
    fn firefighter_rules() {
        let valid = firefighter::Model {
            id: 1,
            first_name: "Ana".into(),
            paternal_surname: "Rojas".into(),
            maternal_surname: "Soto".into(),
            phone: 912_345_678,
        };
        assert!(validate_firefighter(&valid).is_ok());

        let long_surname = firefighter::Model {
            maternal_surname: "s".repeat(51),
            ..valid
        };
        assert_eq!(
            message(validate_firefighter(&long_surname).unwrap_err()),
            "El apellido materno no puede exceder los 50 caracteres"
        );
    }
}
