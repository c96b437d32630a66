use anyhow::Result;
use theminator::services::catppuccin::{self, Flavour};
use theminator::{
    decode_palette, decode_theme, encode_palette, encode_theme, Color, ColorGroup, CoreColors,
    Error, PlotColors, Theme, ThemeComponent, APPLY_TO_ALL,
};

#[test]
fn palette_decode_and_lookup() -> Result<()> {
    let doc = br#"{"colors":[{"red":1,"green":0,"blue":0,"alpha":1}],"names":["Red"]}"#;
    let palette = decode_palette(doc)?;
    assert_eq!(palette.lookup("Red"), Some(&Color::new(1.0, 0.0, 0.0)));
    assert_eq!(palette.lookup("Blue"), None);
    Ok(())
}

#[test]
fn palette_decode_rejects_length_mismatch() {
    let doc = br#"{"colors":[{"red":1,"green":0,"blue":0,"alpha":1}],"names":[]}"#;
    assert!(matches!(
        decode_palette(doc),
        Err(Error::MalformedPalette(_))
    ));
}

#[test]
fn palette_decode_rejects_bad_color_encoding() {
    let doc = br#"{"colors":[{"red":"one","green":0,"blue":0}],"names":["Red"]}"#;
    assert!(matches!(
        decode_palette(doc),
        Err(Error::MalformedPalette(_))
    ));
}

#[test]
fn palette_round_trips() -> Result<()> {
    let palette = catppuccin::palette(Flavour::Latte);
    let decoded = decode_palette(&encode_palette(&palette)?)?;
    assert_eq!(decoded, palette);
    Ok(())
}

#[test]
fn theme_missing_colormaps_decodes_to_empty() -> Result<()> {
    let doc = br#"{"components":[]}"#;
    let theme = decode_theme(doc)?;
    assert!(theme.colormaps.is_empty());
    assert!(theme.components.is_empty());
    Ok(())
}

#[test]
fn theme_unknown_fields_are_ignored() -> Result<()> {
    let doc = br#"{"components":[],"colormaps":[],"generator":"external"}"#;
    decode_theme(doc)?;
    Ok(())
}

#[test]
fn theme_decode_names_the_malformed_field() {
    let doc = br#"{"components":{"not":"a list"}}"#;
    match decode_theme(doc) {
        Err(Error::MalformedTheme { field, .. }) => assert_eq!(field, "components"),
        other => panic!("expected MalformedTheme, got {other:?}"),
    }

    let doc = br#"{"colormaps":[[{"red":"bad","green":0,"blue":0}]]}"#;
    match decode_theme(doc) {
        Err(Error::MalformedTheme { field, .. }) => assert_eq!(field, "colormaps"),
        other => panic!("expected MalformedTheme, got {other:?}"),
    }
}

#[test]
fn theme_decode_rejects_non_object_documents() {
    for doc in [&b"[1,2,3]"[..], b"not json at all"] {
        match decode_theme(doc) {
            Err(Error::MalformedTheme { field, .. }) => assert_eq!(field, "document"),
            other => panic!("expected MalformedTheme, got {other:?}"),
        }
    }
}

#[test]
fn theme_round_trips() -> Result<()> {
    let mut core_colors = CoreColors::default();
    core_colors.text = Some(Color::new(1.0, 1.0, 1.0));
    core_colors.window_bg = Some(Color::with_alpha(0.1, 0.2, 0.3, 0.5));
    let mut plot_colors = PlotColors::default();
    plot_colors.line = Some(Color::new(0.0, 1.0, 0.0));

    let theme = Theme {
        components: vec![
            ThemeComponent {
                core_colors: Some(core_colors),
                plot_colors: Some(plot_colors),
                node_colors: None,
                component: APPLY_TO_ALL,
            },
            ThemeComponent {
                component: 42,
                ..Default::default()
            },
        ],
        colormaps: vec![vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)]],
    };

    let decoded = decode_theme(&encode_theme(&theme)?)?;
    assert_eq!(decoded, theme);
    Ok(())
}

#[test]
fn blank_theme_round_trips() -> Result<()> {
    let theme = Theme::blank();
    let decoded = decode_theme(&encode_theme(&theme)?)?;
    assert_eq!(decoded, theme);
    Ok(())
}

#[test]
fn component_defaults_apply_on_decode() -> Result<()> {
    let doc = br#"{"components":[{"core_colors":{"text":{"red":1,"green":1,"blue":1}}}]}"#;
    let theme = decode_theme(doc)?;
    let component = &theme.components[0];
    assert_eq!(component.component, APPLY_TO_ALL);
    assert!(component.plot_colors.is_none());
    assert!(component.node_colors.is_none());
    let core = component.core_colors.as_ref().unwrap();
    assert_eq!(core.set_count(), 1);
    assert_eq!(core.text, Some(Color::new(1.0, 1.0, 1.0)));
    Ok(())
}

#[test]
fn generated_themes_round_trip() -> Result<()> {
    for flavour in Flavour::ALL {
        let theme = catppuccin::theme(flavour)?;
        let decoded = decode_theme(&encode_theme(&theme)?)?;
        assert_eq!(decoded, theme, "{flavour}");
    }
    Ok(())
}
