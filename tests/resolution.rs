use framekit::{
    expand_template, resolve, resolve_named, Breakpoint, Dimension, FrameProps, LayoutTemplate,
    ResponsiveValue, StyleError, StyleProps,
};

#[test]
fn test_container_cascade() {
    let props = StyleProps::from_json_str(
        r#"{ "container": { "base": "full", "md": "6xl", "xl": "7xl" } }"#,
    )
    .unwrap();
    let set = resolve(&props, None).unwrap();

    let expected = [
        (Breakpoint::Base, "full"),
        (Breakpoint::Xs, "full"),
        (Breakpoint::Sm, "full"),
        (Breakpoint::Md, "6xl"),
        (Breakpoint::Lg, "6xl"),
        (Breakpoint::Xl, "7xl"),
        (Breakpoint::TwoXl, "7xl"),
        (Breakpoint::ThreeXl, "7xl"),
    ];
    for (bp, token) in expected {
        assert_eq!(set.token(Dimension::Container, bp).unwrap(), token, "at {}", bp);
    }
}

#[test]
fn test_template_with_override() {
    let props = StyleProps::new().set(Dimension::Gap, "lg");
    let set = resolve_named(&props, Some("dashboard-grid")).unwrap();

    for bp in Breakpoint::ALL {
        assert_eq!(set.token(Dimension::Gap, bp).unwrap(), "lg");
        assert_eq!(set.token(Dimension::Grid, bp).unwrap(), "auto");
    }
}

#[test]
fn test_sidebar_template_defaults_the_rest() {
    let set = resolve(&StyleProps::new(), Some(LayoutTemplate::SidebarContent)).unwrap();
    assert_eq!(set.token(Dimension::Direction, Breakpoint::Lg).unwrap(), "row");
    assert_eq!(set.token(Dimension::Justify, Breakpoint::Lg).unwrap(), "start");
    assert_eq!(set.token(Dimension::Container, Breakpoint::Lg).unwrap(), "7xl");
    assert_eq!(set.token(Dimension::Padding, Breakpoint::Lg).unwrap(), "md");
}

#[test]
fn test_error_cases() {
    let missing_base = StyleProps::new().set(Dimension::Gap, ResponsiveValue::at(Breakpoint::Sm, "lg"));
    assert_eq!(
        resolve(&missing_base, None).unwrap_err(),
        StyleError::MissingBaseBreakpoint { prop: "gap" }
    );

    assert_eq!(
        expand_template("not-a-real-template").unwrap_err(),
        StyleError::UnknownTemplate {
            name: "not-a-real-template".to_string()
        }
    );

    let bad_align = StyleProps::new().set(Dimension::Align, "diagonal");
    let err = resolve(&bad_align, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid token 'diagonal' for 'align' (allowed: start, center, end)"
    );
}

#[test]
fn test_resolved_set_serializes_in_dimension_order() {
    let props = StyleProps::new()
        .set(Dimension::Items, "center")
        .set(Dimension::Container, "full");
    let set = framekit::Resolver::only([Dimension::Items, Dimension::Container])
        .resolve(&props, None)
        .unwrap();

    let json = serde_json::to_string(&set).unwrap();
    assert!(json.starts_with(r#"{"container":{"base":"full","xs":"full""#));
    assert!(json.find("\"items\"").unwrap() > json.find("\"container\"").unwrap());
}

#[test]
fn test_frame_class_string() {
    let frame = FrameProps::from_json_str(
        r#"{
            "layout": "card-grid",
            "padding": "none",
            "container": { "base": "full", "xl": "7xl" },
            "class": "shadow-lg"
        }"#,
    )
    .unwrap();

    let classes = frame.class_string().unwrap();
    let tokens: Vec<&str> = classes.split(' ').collect();
    assert_eq!(tokens[0], "max-w-full");
    assert_eq!(tokens[1], "xl:max-w-7xl");
    assert!(tokens.contains(&"p-0"));
    assert!(tokens.contains(&"grid-cols-1"));
    assert!(tokens.contains(&"sm:grid-cols-2"));
    assert!(tokens.contains(&"lg:grid-cols-3"));
    assert!(tokens.contains(&"gap-lg"));
    assert_eq!(tokens.last(), Some(&"shadow-lg"));
}

#[test]
fn test_every_template_resolves() {
    for template in LayoutTemplate::ALL {
        let set = resolve(&StyleProps::new(), Some(template)).unwrap();
        assert_eq!(set.len(), Dimension::LAYOUT.len(), "{}", template);
    }
}
