// Host-side tests for transition tables, layout profiles and site content.

use folio_core::content::{Anchor, SiteContent};
use folio_core::layout::{GalleryVariant, LayoutProfile, TimelineVariant};
use folio_core::tween::{Easing, TweenRunner};
use folio_core::variants::{
    self, header_visible, Channel, MenuState, PreloaderView, RevealState,
};

#[test]
fn easing_endpoints_are_fixed() {
    for e in [
        Easing::Linear,
        Easing::ExpoOut,
        Easing::CURTAIN,
        Easing::SOFT_OUT,
        Easing::STANDARD,
    ] {
        assert_eq!(e.apply(0.0), 0.0, "{:?}", e);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", e);
        assert_eq!(e.apply(-1.0), 0.0);
    }
    assert_eq!(Easing::Linear.apply(0.3), 0.3);
    // Symmetric in/out curve crosses the middle at the middle.
    assert!((Easing::CURTAIN.apply(0.5) - 0.5).abs() < 1e-3);
}

#[test]
fn bezier_easing_is_monotonic() {
    let mut last = 0.0;
    for i in 1..=100 {
        let v = Easing::SOFT_OUT.apply(i as f32 / 100.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn runner_waits_for_delay_then_settles() {
    let mut link = TweenRunner::new(variants::nav_link());
    link.set(RevealState::Hidden);
    assert_eq!(link.value(Channel::Opacity), Some(0.0));
    assert_eq!(link.value(Channel::RotateX), Some(90.0));

    link.go_to(RevealState::Visible, 0.0);
    assert!(link.tick(0.25));
    assert_eq!(link.value(Channel::Opacity), Some(0.0));
    assert!(link.tick(0.8));
    let partway = link.value(Channel::Opacity).unwrap();
    assert!(partway > 0.0 && partway < 1.0);

    assert!(!link.tick(2.0));
    assert_eq!(link.value(Channel::Opacity), Some(1.0));
    assert_eq!(link.value(Channel::TranslateY), Some(0.0));
    assert_eq!(link.value(Channel::Width), None);
    assert_eq!(link.state(), Some(RevealState::Visible));
}

#[test]
fn staggered_items_start_later() {
    let mut first = TweenRunner::new(variants::nav_link());
    let mut third = TweenRunner::new(variants::nav_link());
    first.set(RevealState::Hidden);
    third.set(RevealState::Hidden);
    first.go_to_staggered(RevealState::Visible, 0.0, 0.0);
    third.go_to_staggered(RevealState::Visible, 0.0, 2.0 * variants::LINK_STAGGER_SEC);
    first.tick(0.65);
    third.tick(0.65);
    assert!(first.value(Channel::Opacity).unwrap() > 0.0);
    assert_eq!(third.value(Channel::Opacity), Some(0.0));
}

#[test]
fn exit_starts_from_the_current_value() {
    let mut link = TweenRunner::new(variants::nav_link());
    link.set(RevealState::Hidden);
    link.go_to(RevealState::Visible, 0.0);
    link.tick(0.8);
    let shown = link.value(Channel::Opacity).unwrap();
    link.go_to(RevealState::Exit, 0.8);
    link.tick(0.8);
    assert_eq!(link.value(Channel::Opacity), Some(shown));
    link.tick(5.0);
    assert_eq!(link.value(Channel::Opacity), Some(0.0));
}

#[test]
fn menu_panel_follows_viewport_height() {
    let mut panel = TweenRunner::new(variants::menu_panel(800.0));
    panel.set(MenuState::Closed);
    assert_eq!(panel.value(Channel::Width), Some(variants::MENU_CLOSED_WIDTH_PX));
    assert_eq!(panel.value(Channel::Height), Some(variants::MENU_CLOSED_HEIGHT_PX));

    panel.go_to(MenuState::Open, 0.0);
    panel.tick(10.0);
    assert_eq!(panel.value(Channel::Width), Some(variants::MENU_OPEN_WIDTH_PX));
    assert!((panel.value(Channel::Height).unwrap() - 680.0).abs() < 1e-3);

    panel.set_table(variants::menu_panel(1000.0));
    assert!((panel.value(Channel::Height).unwrap() - 850.0).abs() < 1e-3);
    assert_eq!(panel.state(), Some(MenuState::Open));
}

#[test]
fn preloader_curtain_leaves_upwards() {
    let mut curtain = TweenRunner::new(variants::preloader_curtain(900.0));
    curtain.set(PreloaderView::Shown);
    curtain.go_to(PreloaderView::Leaving, 0.0);
    curtain.tick(0.1);
    assert_eq!(curtain.value(Channel::Top), Some(0.0));
    curtain.tick(2.0);
    assert_eq!(curtain.value(Channel::Top), Some(-900.0));
}

#[test]
fn header_hides_past_half_a_viewport() {
    assert!(header_visible(0.0, 800.0));
    assert!(header_visible(400.0, 800.0));
    assert!(!header_visible(401.0, 800.0));
}

#[test]
fn layout_profile_thresholds() {
    let cases = [
        (320.0, LayoutProfile::Phone),
        (375.0, LayoutProfile::Phone),
        (376.0, LayoutProfile::Mobile),
        (768.0, LayoutProfile::Mobile),
        (769.0, LayoutProfile::Tablet),
        (1024.0, LayoutProfile::Tablet),
        (1025.0, LayoutProfile::Desktop),
        (0.0, LayoutProfile::Desktop),
        (f64::NAN, LayoutProfile::Desktop),
    ];
    for (w, expected) in cases {
        assert_eq!(LayoutProfile::from_width(w), expected, "width {}", w);
    }
}

#[test]
fn handheld_layouts_swap_variants() {
    assert_eq!(LayoutProfile::Phone.gallery(), GalleryVariant::Carousel);
    assert_eq!(LayoutProfile::Mobile.timeline(), TimelineVariant::List);
    assert_eq!(LayoutProfile::Tablet.gallery(), GalleryVariant::MouseTrail);
    assert_eq!(LayoutProfile::Desktop.timeline(), TimelineVariant::Path);
    assert_eq!(LayoutProfile::Tablet.name(), "tablet");
}

#[test]
fn anchors_parse_from_hrefs() {
    for a in Anchor::ALL {
        assert_eq!(Anchor::from_href(&format!("#{}", a.id())), Some(a));
        assert_eq!(Anchor::from_href(a.id()), Some(a));
    }
    assert_eq!(Anchor::from_href("#experience"), Some(Anchor::Journey));
    assert_eq!(Anchor::from_href("#nowhere"), None);
    assert_eq!(Anchor::from_href(""), None);
}

#[test]
fn site_content_defaults() {
    let c = SiteContent::default();
    assert_eq!(c.greetings.len(), 9);
    assert_eq!(c.greetings[0], "Watkwanonhwerá:ton");
    assert_eq!(c.gallery.len(), 5);
    assert_eq!(c.milestones.len(), 5);
    assert_eq!(c.anchors.len(), Anchor::ALL.len());
    let specs = c.skill_specs();
    assert_eq!(specs.len(), c.skills.len());
    assert_eq!(specs[0].label, c.skills[0].0);
}
