use super::*;

// =============================================================
// color classes
// =============================================================

#[test]
fn default_color_is_blue() {
	assert_eq!(CardColor::default(), CardColor::Blue);
}

#[test]
fn value_class_carries_the_color_modifier() {
	assert!(value_class(CardColor::Green).ends_with("--green"));
	assert!(value_class(CardColor::Red).ends_with("--red"));
	assert!(value_class(CardColor::Gray).ends_with("--gray"));
}

#[test]
fn badge_class_matches_the_value_color() {
	for color in [
		CardColor::Blue,
		CardColor::Green,
		CardColor::Red,
		CardColor::Purple,
		CardColor::Orange,
		CardColor::Gray,
	] {
		let value = value_class(color).rsplit("--").next().unwrap();
		let badge = badge_class(color).rsplit("--").next().unwrap();
		assert_eq!(value, badge);
	}
}

// =============================================================
// trend glyphs
// =============================================================

#[test]
fn trend_glyphs_are_distinct() {
	let (up, _) = trend_glyph(Trend::Up);
	let (down, _) = trend_glyph(Trend::Down);
	let (neutral, _) = trend_glyph(Trend::Neutral);
	assert_ne!(up, down);
	assert_ne!(up, neutral);
	assert_ne!(down, neutral);
}

#[test]
fn trend_class_carries_the_direction_modifier() {
	assert!(trend_glyph(Trend::Up).1.ends_with("--up"));
	assert!(trend_glyph(Trend::Down).1.ends_with("--down"));
	assert!(trend_glyph(Trend::Neutral).1.ends_with("--neutral"));
}
