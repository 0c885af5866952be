use glam::Vec2;
use map_canvas::input::{Key, KeyTracker, PointerTracker, PointerTrackerOptions};
use map_canvas::render::DrawCommand;
use map_canvas::{ControllerConfig, HeadlessContext, MapController, Modifiers};

fn count_commands(commands: &[DrawCommand]) -> (usize, usize, usize) {
    let mut strokes = 0;
    let mut fills = 0;
    let mut texts = 0;
    for command in commands {
        match command {
            DrawCommand::Stroke { .. } => strokes += 1,
            DrawCommand::Fill { .. } => fills += 1,
            DrawCommand::Text { .. } => texts += 1,
            DrawCommand::Clear { .. } => {}
        }
    }
    (strokes, fills, texts)
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== MapCanvas Headless Demo ===");

    // 1. Initialize the demo controller over a simulated 1280x720 window
    let mut controller = MapController::new(1280.0, 720.0, ControllerConfig::default())
        .expect("valid surface size");
    let mut ctx = HeadlessContext::new(1280.0, 720.0).expect("valid surface size");

    // 2. Device trackers, fed by fake host notifications below
    let mut pointer = PointerTracker::new(PointerTrackerOptions::default());
    let mut keys = KeyTracker::new();
    let modifiers = Modifiers::default();

    // 3. Simulated event loop
    for frame in 0..6u64 {
        println!("\n--- Frame {frame} ---");
        let now_ms = frame * 16;

        let mut key_events = Vec::new();
        let mut pointer_events = Vec::new();

        match frame {
            1 => {
                println!(">> Holding W (pan up) and E (rotate)...");
                keys.press(Key::W, modifiers, now_ms, &mut key_events);
                keys.press(Key::E, modifiers, now_ms, &mut key_events);
            }
            2 => {
                keys.tick(now_ms, &mut key_events);
            }
            3 => {
                println!(">> Releasing keys, scrolling to zoom in at (640, 360)...");
                keys.release(Key::W, modifiers, &mut key_events);
                keys.release(Key::E, modifiers, &mut key_events);
                pointer.wheel(
                    Vec2::new(640.0, 360.0),
                    glam::Vec3::new(0.0, -1.0, 0.0),
                    modifiers,
                    &mut pointer_events,
                );
            }
            4 => {
                println!(">> Dragging the map 40px to the right...");
                pointer.press(Vec2::new(300.0, 300.0), 0, modifiers, now_ms, &mut pointer_events);
                pointer.motion(Vec2::new(320.0, 300.0), modifiers, &mut pointer_events);
                pointer.motion(Vec2::new(340.0, 300.0), modifiers, &mut pointer_events);
                pointer.release(Vec2::new(340.0, 300.0), 0, modifiers, &mut pointer_events);
            }
            5 => {
                println!(">> Clicking the middle of the window...");
                pointer.press(Vec2::new(640.0, 360.0), 0, modifiers, now_ms, &mut pointer_events);
                pointer.release(Vec2::new(640.0, 360.0), 0, modifiers, &mut pointer_events);
            }
            _ => {}
        }

        let mut redraw = frame == 0;
        for event in &key_events {
            redraw |= controller.handle_key(event);
        }
        for event in &pointer_events {
            redraw |= controller.handle_pointer(&mut ctx, event);
        }

        let viewport = controller.viewport();
        println!(
            "  camera: center={} zoom={} angle={}",
            viewport.center(),
            viewport.zoom(),
            viewport.angle_deg(),
        );

        if redraw {
            ctx.take_commands();
            controller.draw(&mut ctx);
            let commands = ctx.take_commands();
            let (strokes, fills, texts) = count_commands(&commands);
            println!(
                "  frame: {} commands ({strokes} strokes, {fills} fills, {texts} texts)",
                commands.len(),
            );
        } else {
            println!("  frame: unchanged, cached transform reused");
        }
    }

    println!(
        "\nScene now holds {} elements.",
        controller.scene().elems.len()
    );
    println!("Demo Complete.");
}
