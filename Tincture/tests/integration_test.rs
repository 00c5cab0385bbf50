use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use tincture::prelude::*;

const SAMPLE_CSS: &str = ".test {
  color: #ff0000;
  background: rgb(0, 255, 0);
  border-color: rgba(0, 0, 255, 0.5);
}
";

#[test]
fn test_create_css() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.css");
    fs::write(&input, SAMPLE_CSS).unwrap();

    let report = create_variables(&input, &CreateOptions::default()).unwrap();
    assert_eq!(report.colors.len(), 3);

    let paths = report.paths.unwrap();
    assert_eq!(paths.variables, dir.path().join("input-variables.css"));
    assert_eq!(paths.substituted, dir.path().join("input-with-variables.css"));

    assert_eq!(
        fs::read_to_string(&paths.variables).unwrap(),
        ":root {
  --color-ff0000: #ff0000;
  --color-rgb-0-255-0-: rgb(0, 255, 0);
  --color-rgba-0-0-255-0-5-: rgba(0, 0, 255, 0.5);
}
"
    );
    assert_eq!(
        fs::read_to_string(&paths.substituted).unwrap(),
        ".test {
  color: var(--color-ff0000);
  background: var(--color-rgb-0-255-0-);
  border-color: var(--color-rgba-0-0-255-0-5-);
}
"
    );
}

#[test]
fn test_create_scss_imports_declarations() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("theme.scss");
    fs::write(
        &input,
        "$primary: #ff0000;\n\n.test {\n  color: $primary;\n  background: rgb(0, 255, 0);\n}\n",
    )
    .unwrap();

    let report = create_variables(&input, &CreateOptions::default()).unwrap();
    let paths = report.paths.unwrap();

    assert_eq!(
        fs::read_to_string(&paths.substituted).unwrap(),
        "@import 'theme-variables';\n\n$primary: var(--color-ff0000);\n\n.test {\n  color: $primary;\n  background: var(--color-rgb-0-255-0-);\n}\n"
    );
    assert_eq!(paths.variables, dir.path().join("theme-variables.scss"));
}

#[test]
fn test_create_into_new_output_dir_with_format() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.css");
    fs::write(&input, SAMPLE_CSS).unwrap();

    let out_dir = dir.path().join("nested").join("output");
    let options = CreateOptions {
        output_dir: Some(out_dir.clone()),
        format: Some(ColorFormat::Hex),
        ..CreateOptions::default()
    };

    let report = create_variables(&input, &options).unwrap();
    assert_eq!(report.format, Some(ColorFormat::Hex));

    let variables = fs::read_to_string(out_dir.join("input-variables.css")).unwrap();
    assert_eq!(
        variables,
        ":root {
  --color-ff0000: #ff0000;
  --color-rgb-0-255-0-: #00ff00;
  --color-rgba-0-0-255-0-5-: #0000ff80;
}
"
    );

    // Substitution still matches the literals as written
    let substituted = fs::read_to_string(out_dir.join("input-with-variables.css")).unwrap();
    assert!(substituted.contains("background: var(--color-rgb-0-255-0-);"));
    assert!(!dir.path().join("input-variables.css").exists());
}

#[test]
fn test_create_with_file_name_overrides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.css");
    fs::write(&input, SAMPLE_CSS).unwrap();

    let options = CreateOptions {
        output_file: Some("app.css".to_string()),
        output_variable_file: Some("palette.css".to_string()),
        ..CreateOptions::default()
    };
    create_variables(&input, &options).unwrap();

    assert!(dir.path().join("app.css").exists());
    assert!(dir.path().join("palette.css").exists());
}

#[test]
fn test_pipeline_in_memory() {
    let source = "a { color: #ff0000; }\nb { color: rgb(0, 255, 0); border: 1px solid #ff0000; }\n";

    let mut colors = scan_str(source);
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0].line(), 1);

    convert_all(&mut colors, "rgba").unwrap();
    assert_eq!(
        write_declarations(&colors),
        ":root {\n  --color-ff0000: rgba(255, 0, 0, 1.00);\n  --color-rgb-0-255-0-: rgba(0, 255, 0, 1.00);\n}\n"
    );
    assert_eq!(
        write_substituted(source, &colors, None),
        "a { color: var(--color-ff0000); }\nb { color: var(--color-rgb-0-255-0-); border: 1px solid var(--color-ff0000); }\n"
    );
}

#[test]
fn test_unsupported_format_is_rejected() {
    let mut colors = scan_str("#ff0000");
    let err = convert_all(&mut colors, "bogus").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert_eq!(colors[0].value(), "#ff0000");
    assert!("bogus".parse::<ColorFormat>().is_err());
}

#[test]
fn test_scan_json_shape() {
    let colors = scan_str("color: #ff0000;");
    let json = serde_json::to_value(&colors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "original": "#ff0000",
            "name": "--color-ff0000",
            "value": "#ff0000",
            "line": 1,
        }])
    );
}
