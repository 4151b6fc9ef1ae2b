use super::*;

const SPRITE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" style="display: none">
    <defs>
        <symbol id="arrow-up" data-tags="direction navigation" viewBox="0 0 16 16">
            <path d="M8 2l6 6H2z"/>
        </symbol>
    </defs>
    <symbol id="broom-sweeping" data-tags="cleaning" viewBox="0 0 16 16">
        <path d="M1 1h14v14H1z"/>
    </symbol>
    <symbol id="magnifying-glass-left" viewBox="0 0 16 16"/>
</svg>
"##;

mod source {
    use super::*;

    #[test]
    fn test_parse_http_url() {
        assert_eq!(
            SpriteSource::parse("https://cdn.example.com/icons.svg"),
            SpriteSource::Url("https://cdn.example.com/icons.svg".to_string())
        );
        assert_eq!(
            SpriteSource::parse("http://localhost/icons.svg"),
            SpriteSource::Url("http://localhost/icons.svg".to_string())
        );
    }

    #[test]
    fn test_parse_file_path() {
        assert_eq!(
            SpriteSource::parse(" assets/is-icon-defs.svg "),
            SpriteSource::File(PathBuf::from("assets/is-icon-defs.svg"))
        );
    }

    #[test]
    fn test_display() {
        let source = SpriteSource::parse("icons/defs.svg");
        assert_eq!(source.to_string(), "icons/defs.svg");
    }
}

mod parse {
    use super::*;

    #[test]
    fn test_symbols_in_document_order() {
        let icons = parse_sprite(SPRITE).unwrap();

        let names: Vec<&str> = icons.iter().map(|icon| icon.name()).collect();
        assert_eq!(
            names,
            vec!["arrow-up", "broom-sweeping", "magnifying-glass-left"]
        );
    }

    #[test]
    fn test_reads_data_tags() {
        let icons = parse_sprite(SPRITE).unwrap();

        assert_eq!(icons[0].tags(), Some("direction navigation"));
        assert_eq!(icons[1].tags(), Some("cleaning"));
        assert_eq!(icons[2].tags(), None);
    }

    #[test]
    fn test_missing_id_gives_empty_name() {
        let icons = parse_sprite(r#"<svg><symbol data-tags="orphan"/></svg>"#).unwrap();

        assert_eq!(icons, vec![IconEntry::new("", Some("orphan".to_string()))]);
    }

    #[test]
    fn test_no_symbols() {
        let icons = parse_sprite("<svg><g id=\"not-a-symbol\"/></svg>").unwrap();
        assert!(icons.is_empty());
    }

    #[test]
    fn test_doctype_is_accepted() {
        let text = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg><symbol id="cart-flatbed-boxes"/></svg>"#;

        let icons = parse_sprite(text).unwrap();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name(), "cart-flatbed-boxes");
    }

    #[test]
    fn test_rejects_non_xml() {
        let result = parse_sprite("this is not a sprite <svg");
        assert!(matches!(result, Err(SpriteError::Xml(_))));
    }
}

mod load {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SPRITE.as_bytes()).unwrap();

        let source = SpriteSource::File(file.path().to_path_buf());
        let icons = load_icons(&source).await.unwrap();

        assert_eq!(icons.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = SpriteSource::File(dir.path().join("missing.svg"));

        let result = load_icons(&source).await;
        assert!(matches!(result, Err(SpriteError::Io { .. })));
    }
}
