// Integration tests for the cleanup pass over realistic rendered content

use seekbase::core::extract::{cleanup, MAX_WORD_OCCURRENCES};

#[test]
fn test_no_markup_survives_rendered_page() {
    let rendered = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Launch</title></head>
        <body>
            <?php echo render_header(); ?>
            <div class="hero">
                <h1>Product Launch</h1>
                <p>Announcing the <b>new</b> release for spring.</p>
            </div>
        </body>
        </html>
    "#;

    let cleaned = cleanup(rendered, 3, 84);
    assert!(!cleaned.contains('<'));
    assert!(!cleaned.contains('>'));
    assert!(cleaned.contains("Product"));
    assert!(cleaned.contains("Launch"));
    assert!(cleaned.contains("Announcing"));
    assert!(cleaned.contains("spring."));
    // attribute values inside tags are gone
    assert!(!cleaned.contains("hero"));
}

#[test]
fn test_occurrence_cap_bounds_repetitions() {
    let spammy = "keyword ".repeat(50);
    let cleaned = cleanup(&spammy, 3, 84);

    let count = cleaned.split(' ').filter(|w| *w == "keyword").count();
    assert_eq!(count, MAX_WORD_OCCURRENCES);
}

#[test]
fn test_occurrence_cap_is_per_word() {
    let cleaned = cleanup("alpha alpha alpha alpha beta beta beta beta", 3, 84);
    assert_eq!(cleaned, "alpha alpha alpha beta beta beta");
}

#[test]
fn test_entity_decoding_before_filtering() {
    // &nbsp; decodes to a non-breaking space, which is not a word
    // separator; the surrounding words stay joined
    let cleaned = cleanup("Caf&eacute; &amp; Bar", 3, 84);
    assert!(cleaned.contains("Café"));
    assert!(!cleaned.contains("&eacute;"));
    assert!(!cleaned.contains("&amp;"));
}

#[test]
fn test_email_like_tokens_stay_whole() {
    let cleaned = cleanup("reach us at cost#example.com today", 3, 84);
    assert!(cleaned.contains("cost#example.com"));
}

#[test]
fn test_cleanup_of_cleaned_output_is_stable() {
    let rendered = "<p>Some body text, with 'quotes' and &amp; entities.</p>";
    let once = cleanup(rendered, 3, 84);
    let twice = cleanup(&once, 3, 84);
    assert_eq!(once, twice);
}

#[test]
fn test_bounds_apply_after_normalization() {
    // "it" only becomes a standalone word after the comma is
    // replaced; it is then dropped by the minimum length
    let cleaned = cleanup("take,it,slow", 3, 84);
    assert_eq!(cleaned, "take slow");
}
