use super::*;

// =============================================================
// Before init
// =============================================================

#[test]
fn operations_before_init_are_no_ops() {
    let mut lc = Lifecycle::new();
    assert!(lc.open().is_empty());
    assert!(lc.close().is_empty());
    assert!(lc.toggle().is_empty());
    assert!(lc.destroy().is_empty());
    assert!(!lc.is_open());
    assert!(!lc.is_mounted());
}

// =============================================================
// Init / open / close
// =============================================================

#[test]
fn init_mounts_chrome_once() {
    let mut lc = Lifecycle::new();
    assert_eq!(lc.init(false), vec![Effect::MountChrome]);
    assert!(lc.init(false).is_empty());
    assert!(lc.is_mounted());
    assert!(!lc.is_open());
}

#[test]
fn auto_open_opens_right_after_mount() {
    let mut lc = Lifecycle::new();
    assert_eq!(
        lc.init(true),
        vec![Effect::MountChrome, Effect::ShowPanel, Effect::HideLauncher, Effect::CreateFrame]
    );
    assert!(lc.is_open());
}

#[test]
fn frame_is_created_only_on_first_open() {
    let mut lc = Lifecycle::new();
    lc.init(false);
    assert_eq!(lc.open(), vec![Effect::ShowPanel, Effect::HideLauncher, Effect::CreateFrame]);
    assert_eq!(lc.close(), vec![Effect::HidePanel, Effect::ShowLauncher]);
    assert_eq!(lc.open(), vec![Effect::ShowPanel, Effect::HideLauncher]);
}

#[test]
fn toggle_flips_visibility() {
    let mut lc = Lifecycle::new();
    lc.init(false);
    lc.toggle();
    assert!(lc.is_open());
    assert_eq!(lc.toggle(), vec![Effect::HidePanel, Effect::ShowLauncher]);
    assert!(!lc.is_open());
}

// =============================================================
// Destroy
// =============================================================

#[test]
fn destroy_resets_so_next_open_recreates_frame() {
    let mut lc = Lifecycle::new();
    lc.init(true);
    assert_eq!(lc.destroy(), vec![Effect::RemoveChrome]);
    assert!(!lc.is_mounted());
    assert!(!lc.is_open());
    assert!(lc.open().is_empty());

    lc.init(false);
    assert!(lc.open().contains(&Effect::CreateFrame));
}

// =============================================================
// Failed effects
// =============================================================

#[test]
fn failed_mount_lets_init_retry() {
    let mut lc = Lifecycle::new();
    lc.init(true);
    lc.mount_failed();
    assert!(!lc.is_mounted());
    assert!(!lc.is_open());
    assert!(lc.open().is_empty());

    assert_eq!(lc.init(false), vec![Effect::MountChrome]);
    assert_eq!(lc.open(), vec![Effect::ShowPanel, Effect::HideLauncher, Effect::CreateFrame]);
}

#[test]
fn failed_frame_is_recreated_on_next_open() {
    let mut lc = Lifecycle::new();
    lc.init(false);
    lc.open();
    assert_eq!(lc.frame_failed(), vec![Effect::HidePanel, Effect::ShowLauncher]);
    assert!(!lc.is_open());
    assert_eq!(lc.open(), vec![Effect::ShowPanel, Effect::HideLauncher, Effect::CreateFrame]);
    assert_eq!(lc.open(), vec![Effect::ShowPanel, Effect::HideLauncher]);
}

#[test]
fn frame_failed_before_init_is_a_no_op() {
    let mut lc = Lifecycle::new();
    assert!(lc.frame_failed().is_empty());
    assert_eq!(lc, Lifecycle::new());
}
