use super::*;

#[test]
fn test_error_conversion() {
    let err = Error::param("twist", "curve constants are D-type");
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidParameter { context, .. } => {
            assert_eq!(context, "twist");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    let err = Error::Length {
        context: "G1 compressed",
        expected: 73,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidLength { context, expected, actual } => {
            assert_eq!(context, "G1 compressed");
            assert_eq!(expected, 73);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    let core_err = CoreError::from(Error::Point {
        group: "G2",
        reason: "not in subgroup",
    });
    assert!(matches!(core_err, CoreError::InvalidPoint { context: "G2", .. }));
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("buffer", 73, 73).is_ok());
    let err = validate::length("buffer", 16, 73).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "buffer",
            expected: 73,
            actual: 16,
        }
    );

    assert!(validate::point(false, "GT", "order check failed").is_err());
}

#[test]
fn test_point_error_display() {
    let err = Error::Point {
        group: "Gt",
        reason: "order check failed",
    };
    assert_eq!(err.to_string(), "Invalid Gt element: order check failed");
}
