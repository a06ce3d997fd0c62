use chrono::NaiveDate;

use namesmith::hosts::ManifestItem;
use namesmith::item::{ItemKind, RenameTarget, Selection};
use namesmith::tokens::{ContextTokens, RunContext, TokenResolver, sanitize_replace};

fn fixed_context() -> RunContext {
    let now = NaiveDate::from_ymd_opt(2024, 2, 21)
        .unwrap()
        .and_hms_opt(15, 7, 0)
        .unwrap();
    RunContext::new(now, "feature", "kieran")
}

fn resolver_for(items: &mut [ManifestItem], lookup: ContextTokens) -> TokenResolver {
    let selection = Selection::new(
        items
            .iter_mut()
            .map(|item| item as &mut dyn RenameTarget)
            .collect(),
    );
    TokenResolver::new(&fixed_context(), &selection, lookup)
}

#[test]
fn test_generic_tokens_resolve() {
    let mut items = vec![ManifestItem::new("clip", ItemKind::Clip)];
    let resolver = resolver_for(&mut items, ContextTokens::None);

    assert_eq!(
        resolver.resolve_for_item(0, "<YYYY>-<MM>-<DD>_<HH><mm>_<hh><pp>"),
        "2024-02-21_1507_03pm"
    );
    assert_eq!(resolver.resolve_for_item(0, "<YY><PP>"), "24PM");
    assert_eq!(resolver.resolve_for_item(0, "<project>_<user>"), "feature_kieran");
}

#[test]
fn test_resolution_is_idempotent_once_resolved() {
    let mut items = vec![ManifestItem::new("clip", ItemKind::Clip)];
    let resolver = resolver_for(&mut items, ContextTokens::None);

    let once = resolver.resolve_for_item(0, "v_<YYYY>");
    assert_eq!(resolver.resolve_for_item(0, &once), once);
}

#[test]
fn test_unknown_placeholder_is_left_alone() {
    let mut items = vec![ManifestItem::new("clip", ItemKind::Clip)];
    let resolver = resolver_for(&mut items, ContextTokens::None);

    assert_eq!(resolver.resolve_for_item(0, "<nope>_<user>"), "<nope>_kieran");
}

#[test]
fn test_contextual_tokens_per_item() {
    let mut items = vec![
        ManifestItem::new("a", ItemKind::Segment).with_context("sh010"),
        ManifestItem::new("b", ItemKind::Segment).with_context("sh020"),
        ManifestItem::new("c", ItemKind::Segment),
    ];
    let resolver = resolver_for(&mut items, ContextTokens::ShotName);

    assert_eq!(
        resolver.resolve_all("<shot name>_comp"),
        vec!["sh010_comp", "sh020_comp", "_comp"]
    );
}

#[test]
fn test_available_tokens_come_from_first_item() {
    let mut items = vec![
        ManifestItem::new("a", ItemKind::Clip).with_context("ACEScg"),
        ManifestItem::new("b", ItemKind::Clip).with_context("Rec.709"),
    ];
    let resolver = resolver_for(&mut items, ContextTokens::ColourSpace);

    let tokens = resolver.available_tokens();
    let colour = tokens
        .iter()
        .find(|token| token.placeholder == "<colour space>")
        .expect("colour space token");

    assert_eq!(tokens.len(), 12);
    assert_eq!(colour.value.as_deref(), Some("ACEScg"));
}

#[test]
fn test_empty_selection_offers_generic_tokens_only() {
    let mut items: Vec<ManifestItem> = Vec::new();
    let resolver = resolver_for(&mut items, ContextTokens::ShotName);

    assert!(resolver.is_empty());
    assert_eq!(resolver.available_tokens().len(), 11);
    assert!(resolver.resolve_all("<user>").is_empty());
}

#[test]
fn test_sanitize_keeps_token_brackets() {
    assert_eq!(sanitize_replace("<user>|a/b\\c+d*e'f;g`h"), "<user>_a_b_c_d_e_f_g_h");
}
