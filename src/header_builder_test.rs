use super::*;

fn trusted(preflight: bool) -> CorsDecision {
    CorsDecision {
        status: OriginStatus::Trusted,
        allow_origin: Some("https://app.example.com".into()),
        allow_credentials: false,
        allow_methods: vec!["GET".into(), "POST".into()],
        allow_headers: vec!["X-Trace".into()],
        expose_headers: vec!["X-Request-Id".into()],
        max_age: Some(600),
        preflight,
    }
}

fn value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name).map(String::as_str)
}

mod build {
    use super::*;

    #[test]
    fn when_not_applicable_should_emit_nothing() {
        // Arrange
        let decision = CorsDecision::not_applicable();

        // Act
        let headers = HeaderBuilder::new(&decision).build();

        // Assert
        assert!(headers.is_empty());
    }

    #[test]
    fn when_denied_should_emit_only_vary() {
        // Arrange
        let decision = CorsDecision::denied(OriginStatus::Untrusted, false);

        // Act
        let headers = HeaderBuilder::new(&decision).build();

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(value(&headers, header::VARY), Some("Origin"));
    }

    #[test]
    fn when_denied_preflight_should_vary_on_request_headers_too() {
        // Arrange
        let decision = CorsDecision::denied(OriginStatus::Malformed, true);

        // Act
        let headers = HeaderBuilder::new(&decision).build();

        // Assert
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert_eq!(
            value(&headers, header::VARY),
            Some("Origin, Access-Control-Request-Method, Access-Control-Request-Headers")
        );
    }

    #[test]
    fn when_trusted_actual_request_should_emit_expose_headers_but_not_max_age() {
        // Arrange
        let decision = trusted(false);

        // Act
        let headers = HeaderBuilder::new(&decision).build();

        // Assert
        assert_eq!(
            value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example.com")
        );
        assert_eq!(value(&headers, header::VARY), Some("Origin"));
        assert_eq!(
            value(&headers, header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET,POST")
        );
        assert_eq!(
            value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some("X-Trace")
        );
        assert_eq!(
            value(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some("X-Request-Id")
        );
        assert!(!headers.contains_key(header::ACCESS_CONTROL_MAX_AGE));
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
    }

    #[test]
    fn when_trusted_preflight_should_emit_max_age_but_not_expose_headers() {
        // Arrange
        let decision = trusted(true);

        // Act
        let headers = HeaderBuilder::new(&decision).build();

        // Assert
        assert_eq!(value(&headers, header::ACCESS_CONTROL_MAX_AGE), Some("600"));
        assert!(!headers.contains_key(header::ACCESS_CONTROL_EXPOSE_HEADERS));
    }
}

mod build_credentials_header {
    use super::*;

    #[test]
    fn when_credentials_allowed_should_emit_true() {
        // Arrange
        let decision = CorsDecision {
            allow_credentials: true,
            ..trusted(false)
        };

        // Act
        let headers = HeaderBuilder::new(&decision)
            .build_credentials_header()
            .into_headers();

        // Assert
        assert_eq!(
            value(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }
}

mod build_methods_header {
    use super::*;

    #[test]
    fn when_no_methods_should_omit_header() {
        // Arrange
        let decision = CorsDecision {
            allow_methods: Vec::new(),
            ..trusted(false)
        };

        // Act
        let headers = HeaderBuilder::new(&decision)
            .build_methods_header()
            .into_headers();

        // Assert
        assert!(headers.is_empty());
    }
}
