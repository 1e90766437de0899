use rpixed::palette::{PANEL_COLOR, SELECTION_BASE_COLOR, SELECTION_CONTRAST_COLOR};
use rpixed::{
    Framebuffer, ImagePanel, IndexedImage, InputEvent, MouseButton, PanelConfig, PanelEvents,
    PanelHost, PanelMode, GRID_SIZE, IMAGE_SIZE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parent container double that records what the panel publishes.
struct MockHost {
    image: IndexedImage,
    drawing_pos: (i32, i32),
    help: String,
    drawing_writes: usize,
}

impl MockHost {
    fn new() -> Self {
        Self::with_image(IndexedImage::new(IMAGE_SIZE, IMAGE_SIZE))
    }

    fn with_image(image: IndexedImage) -> Self {
        Self {
            image,
            drawing_pos: (0, 0),
            help: String::new(),
            drawing_writes: 0,
        }
    }
}

impl PanelHost for MockHost {
    fn drawing_pos(&self) -> (i32, i32) {
        self.drawing_pos
    }

    fn set_drawing_pos(&mut self, x: i32, y: i32) {
        self.drawing_pos = (x, y);
        self.drawing_writes += 1;
    }

    fn set_help_message(&mut self, message: String) {
        self.help = message;
    }

    fn image(&self) -> &IndexedImage {
        &self.image
    }
}

fn gradient_image() -> IndexedImage {
    let pixels = (0..IMAGE_SIZE * IMAGE_SIZE)
        .map(|i| ((i % IMAGE_SIZE + i / IMAGE_SIZE) % 16) as u8)
        .collect();
    IndexedImage::from_pixels(IMAGE_SIZE, IMAGE_SIZE, pixels).unwrap()
}

fn click(panel: &mut ImagePanel, host: &mut MockHost, x: i32, y: i32) {
    panel.dispatch(host, InputEvent::Press { button: MouseButton::Primary, x, y });
    panel.dispatch(host, InputEvent::Release { button: MouseButton::Primary, x, y });
}

// ===== Properties =====

#[test]
fn test_screen_to_view_is_aligned_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);

    for mode in [PanelMode::Image, PanelMode::Tilemap] {
        let mut panel = ImagePanel::new(mode);
        let (select_w, select_h) = panel.selection_size();

        for _ in 0..500 {
            panel.restore_viewport(rng.gen_range(-64..320), rng.gen_range(-64..320));
            let x = rng.gen_range(-100..400);
            let y = rng.gen_range(-100..400);

            let (vx, vy) = panel.screen_to_view(x, y);
            assert_eq!(vx % GRID_SIZE, 0, "x={} y={}", x, y);
            assert_eq!(vy % GRID_SIZE, 0, "x={} y={}", x, y);
            assert!((0..=IMAGE_SIZE - select_w).contains(&vx));
            assert!((0..=IMAGE_SIZE - select_h).contains(&vy));
        }
    }
}

#[test]
fn test_pressing_the_same_point_twice_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut panel = ImagePanel::new(PanelMode::Tilemap);
    let mut host = MockHost::new();

    for _ in 0..200 {
        let x = rng.gen_range(158..222);
        let y = rng.gen_range(81..145);
        click(&mut panel, &mut host, x, y);
        let first = panel.selection();
        click(&mut panel, &mut host, x, y);
        assert_eq!(panel.selection(), first);
    }
}

#[test]
fn test_random_pans_keep_residue_and_viewport_in_range() {
    let mut rng = StdRng::seed_from_u64(42);

    for mode in [PanelMode::Image, PanelMode::Tilemap] {
        let mut panel = ImagePanel::new(mode);
        let mut host = MockHost::new();
        let config = *panel.config();
        let (x, y) = (config.rect.x + 10, config.rect.y + 10);

        panel.dispatch(&mut host, InputEvent::Press { button: MouseButton::Secondary, x, y });
        for _ in 0..1000 {
            let dx = rng.gen_range(-30..=30);
            let dy = rng.gen_range(-30..=30);
            panel.dispatch(
                &mut host,
                InputEvent::Drag { button: MouseButton::Secondary, x, y, dx, dy },
            );

            let (acc_x, acc_y) = panel.drag_offset();
            assert!(acc_x.abs() < GRID_SIZE && acc_y.abs() < GRID_SIZE);

            let (vx, vy) = panel.viewport();
            assert!((0..=config.viewport_max_x).contains(&vx));
            assert!((0..=config.viewport_max_y).contains(&vy));
            assert_eq!(vx % GRID_SIZE, 0);
            assert_eq!(vy % GRID_SIZE, 0);
        }
        panel.dispatch(&mut host, InputEvent::Release { button: MouseButton::Secondary, x, y });
    }
}

// ===== Scenarios =====

#[test]
fn test_image_mode_press_at_panel_corner() {
    let mut panel = ImagePanel::new(PanelMode::Image);
    let mut host = MockHost::new();
    host.drawing_pos = (64, 64);

    click(&mut panel, &mut host, 158, 17);

    assert_eq!(panel.selection(), (0, 0));
    assert_eq!(host.drawing_pos, (0, 0));
}

#[test]
fn test_tilemap_press_snaps_without_touching_parent() {
    let mut panel = ImagePanel::new(PanelMode::Tilemap);
    let mut host = MockHost::new();

    // Raw x of 3 snaps down to the first tile
    click(&mut panel, &mut host, 157 + 1 + 3, 80 + 1 + 12);

    assert_eq!(panel.selection(), (0, 8));
    assert_eq!(host.drawing_writes, 0);
}

#[test]
fn test_right_drag_moves_viewport_in_whole_steps() {
    let mut panel = ImagePanel::new(PanelMode::Image);
    let mut host = MockHost::new();

    panel.dispatch(&mut host, InputEvent::Press { button: MouseButton::Secondary, x: 190, y: 60 });
    panel.dispatch(
        &mut host,
        InputEvent::Drag { button: MouseButton::Secondary, x: 170, y: 60, dx: -20, dy: 0 },
    );

    assert_eq!(panel.viewport(), (16, 0));
    assert_eq!(panel.drag_offset(), (4, 0));

    // Pan never moves the selection
    assert_eq!(panel.selection(), (0, 0));
}

#[test]
fn test_scroll_bar_value_drives_viewport() {
    let mut panel = ImagePanel::new(PanelMode::Image);
    panel.on_h_scroll_bar_change(5);
    assert_eq!(panel.viewport(), (40, 0));
}

#[test]
fn test_scroll_bar_clicks_drive_viewport() {
    let mut panel = ImagePanel::new(PanelMode::Image);
    let mut host = MockHost::new();

    // Right arrow button of the horizontal bar
    for _ in 0..5 {
        click(&mut panel, &mut host, 157 + 63, 148);
    }
    assert_eq!(panel.h_scroll_bar().value(), 5);
    assert_eq!(panel.viewport(), (40, 0));

    // Scroll-bar clicks never reach the selection
    assert_eq!(host.drawing_writes, 0);
}

#[test]
fn test_update_syncs_bars_without_feedback() {
    let mut panel = ImagePanel::new(PanelMode::Tilemap);
    let mut host = MockHost::new();

    panel.dispatch(&mut host, InputEvent::Press { button: MouseButton::Secondary, x: 190, y: 100 });
    panel.dispatch(
        &mut host,
        InputEvent::Drag { button: MouseButton::Secondary, x: 150, y: 60, dx: -40, dy: -40 },
    );
    panel.on_update(&host);

    assert_eq!(panel.viewport(), (40, 40));
    assert_eq!(panel.h_scroll_bar().value(), 5);
    assert_eq!(panel.v_scroll_bar().value(), 5);

    // Repeated updates leave everything where it is
    panel.on_update(&host);
    assert_eq!(panel.viewport(), (40, 40));
    assert_eq!(panel.drag_offset(), (0, 0));
}

#[test]
fn test_image_mode_follows_parent_on_update() {
    let mut panel = ImagePanel::new(PanelMode::Image);
    let mut host = MockHost::new();
    host.drawing_pos = (48, 96);

    panel.on_update(&host);
    assert_eq!(panel.selection(), (48, 96));

    // Tilemap panels keep their own selection
    let mut tilemap = ImagePanel::new(PanelMode::Tilemap);
    tilemap.on_update(&host);
    assert_eq!(tilemap.selection(), (0, 0));
}

#[test]
fn test_hover_publishes_help_per_mode() {
    let mut host = MockHost::new();

    let mut image = ImagePanel::new(PanelMode::Image);
    image.dispatch(&mut host, InputEvent::Hover { x: 158, y: 17 });
    assert_eq!(host.help, "TARGET:CURSOR VIEW:R-DRAG (0,0)");

    let mut tilemap = ImagePanel::new(PanelMode::Tilemap);
    tilemap.dispatch(&mut host, InputEvent::Hover { x: 158 + 16, y: 81 + 8 });
    assert_eq!(host.help, "VIEW:R-DRAG (16,8)");
}

#[test]
fn test_invalid_layout_is_rejected() {
    let mut config = PanelConfig::for_mode(PanelMode::Tilemap);
    config.select_width = 12;
    assert!(ImagePanel::with_config(config).is_err());
}

// ===== Drawing =====

#[test]
fn test_draw_blits_image_and_clips_rings() {
    let panel = ImagePanel::new(PanelMode::Image);
    let host = MockHost::with_image(gradient_image());
    let mut fb = Framebuffer::new(240, 160);

    panel.draw_with_scroll_bars(&host, &mut fb);

    // Interior shows image pixel (19, 3) at screen (177, 20)
    assert_eq!(fb.pget(177, 20), Some(((19 + 3) % 16) as u8));

    // Selection (0, 0) puts the inner ring on the frame; clipping keeps the frame
    assert_eq!(fb.pget(157, 20), Some(PANEL_COLOR));
    assert_eq!(fb.pget(157, 16 + 40), Some(PANEL_COLOR));

    // The right edges of the three rings are inside the clip
    assert_eq!(fb.pget(174, 20), Some(SELECTION_BASE_COLOR));
    assert_eq!(fb.pget(175, 20), Some(SELECTION_CONTRAST_COLOR));
    assert_eq!(fb.pget(176, 20), Some(SELECTION_BASE_COLOR));

    assert_eq!(fb.clip_rect(), None);
}

#[test]
fn test_draw_follows_viewport() {
    let mut panel = ImagePanel::new(PanelMode::Tilemap);
    let host = MockHost::with_image(gradient_image());
    panel.on_v_scroll_bar_change(3);
    panel.on_update(&host);
    let mut fb = Framebuffer::new(240, 160);

    panel.on_draw(&host, &mut fb);

    // Screen (200, 100) shows image (200 - 158, 100 - 81 + 24)
    assert_eq!(fb.pget(200, 100), Some(((42 + 43) % 16) as u8));

    // Selection scrolled out of view leaves the top rows untouched
    assert_eq!(fb.pget(160, 81), Some(((2 + 24) % 16) as u8));
}
