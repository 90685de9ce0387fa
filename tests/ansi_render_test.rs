use wordbook::{
    ansi::{render_lookup, AnsiOptions},
    extract::ExtractionResult,
    theme::Theme,
    Lookup,
};

fn create_test_lookup() -> Lookup {
    Lookup {
        word: "swift".to_string(),
        result: ExtractionResult {
            meaning: "-moving very fast. Synonyms: quick, fast\n -happening quickly".to_string(),
            usage: "A swift reply.\n-The swift current.".to_string(),
            synonyms: "quick, fast".to_string(),
            antonyms: "No antonyms found.".to_string(),
        },
    }
}

fn options(color: bool) -> AnsiOptions {
    AnsiOptions {
        terminal_width: 80,
        color,
        theme: Theme::default(),
    }
}

#[test]
fn test_render_sections_in_order() {
    let output = render_lookup(&create_test_lookup(), &options(false)).unwrap();

    let positions: Vec<usize> = ["Meaning", "Usage in Sentences", "Synonyms", "Antonyms"]
        .iter()
        .map(|heading| output.find(&format!("{heading}\n")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(output.starts_with("swift\n"));
    assert!(output.contains("-moving very fast. Synonyms: quick, fast\n -happening quickly"));
    assert!(output.contains("No antonyms found."));
}

#[test]
fn test_render_with_color() {
    let output = render_lookup(&create_test_lookup(), &options(true)).unwrap();

    assert!(output.contains("[1m")); // Bold
    assert!(output.contains("[38;2;")); // RGB color
    assert!(output.contains("[0m")); // Reset
}

#[test]
fn test_render_without_color() {
    let output = render_lookup(&create_test_lookup(), &options(false)).unwrap();
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn test_separator_respects_width() {
    let narrow = AnsiOptions {
        terminal_width: 10,
        ..options(false)
    };
    let output = render_lookup(&create_test_lookup(), &narrow).unwrap();
    assert!(output.contains(&format!("{}\n", "=".repeat(10))));
    assert!(!output.contains(&"=".repeat(11)));

    let wide = AnsiOptions {
        terminal_width: 200,
        ..options(false)
    };
    let output = render_lookup(&create_test_lookup(), &wide).unwrap();
    assert!(output.contains(&"=".repeat(50)));
    assert!(!output.contains(&"=".repeat(51)));
}
