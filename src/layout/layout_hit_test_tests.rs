//! Tests for region hit testing

use ratatui::layout::Rect;

use super::layout_hit_test::region_at;
use super::layout_regions::{LayoutRegions, Region};

fn create_test_regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.strip = Some(Rect::new(0, 0, 80, 8));
    regions.push_card(4, Rect::new(0, 0, 18, 6));
    regions.push_card(5, Rect::new(20, 0, 18, 6));
    regions.page_prev = Some(Rect::new(60, 9, 3, 1));
    regions.page_next = Some(Rect::new(76, 9, 3, 1));
    regions.detail_panel = Some(Rect::new(0, 10, 80, 12));
    regions
}

#[test]
fn test_hit_card() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 0, 0), Some(Region::Card(4)));
    assert_eq!(region_at(&regions, 17, 5), Some(Region::Card(4)));
    assert_eq!(region_at(&regions, 20, 3), Some(Region::Card(5)));
}

#[test]
fn test_gap_between_cards_hits_strip() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 18, 2), Some(Region::Strip));
    assert_eq!(region_at(&regions, 40, 7), Some(Region::Strip));
}

#[test]
fn test_hit_pagination_buttons() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 61, 9), Some(Region::PagePrev));
    assert_eq!(region_at(&regions, 78, 9), Some(Region::PageNext));
    assert_eq!(region_at(&regions, 70, 9), None);
}

#[test]
fn test_hit_detail_panel() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 40, 15), Some(Region::DetailPanel));
}

#[test]
fn test_hit_outside_all_regions() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 80, 0), None);
    assert_eq!(region_at(&regions, 0, 30), None);
}

#[test]
fn test_empty_regions() {
    let regions = LayoutRegions::new();
    assert_eq!(region_at(&regions, 0, 0), None);
}
