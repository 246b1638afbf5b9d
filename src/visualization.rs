//! Interactive 3D view of the puzzle using kiss3d.

use kiss3d::prelude::*;
use log::warn;

use rubik::controller::CubieFrame;
use rubik::error::PuzzleError;
use rubik::geometry::{Axis, Point};
use rubik::slot::CubieId;
use rubik::PuzzleOps;

/// Size of each rendered cubie relative to the edge length (gaps show the grid).
const CUBE_FILL: f32 = 0.9;

/// Brightness factor for cubies outside the selection.
const UNSELECTED_DIM: f32 = 0.45;

pub const CONTROLS: &str =
    "Controls: Up/Down change index, Left/Right change section, Enter/Backspace rotate, Esc quit";

/// Display colour of a cubie, derived from its home slot.
///
/// The colour follows the cubie as it moves, so every turn is visible.
fn cubie_color(cubie: CubieId, dim: usize, selected: bool) -> Color {
    let dim = dim.max(2);
    let home = cubie as usize;
    let channel = |coord: usize| 0.25 + 0.75 * coord as f32 / (dim - 1) as f32;
    let (r, g, b) = (
        channel(home % dim),
        channel(home / (dim * dim)),
        channel((home / dim) % dim),
    );
    let scale = if selected { 1.0 } else { UNSELECTED_DIM };
    Color::new(r * scale, g * scale, b * scale, 1.0)
}

fn to_vec3(point: Point) -> Vec3 {
    Vec3::new(point.0, point.1, point.2)
}

fn axis_vec3(axis: Axis) -> Vec3 {
    to_vec3(axis.unit_vector())
}

/// Ignores busy rejections, the way key presses during a turn are dropped.
fn drop_busy(result: Result<(), PuzzleError>) {
    match result {
        Ok(()) | Err(PuzzleError::Busy) => {}
        Err(e) => warn!("{e}"),
    }
}

/// Applies one key press to the puzzle. Returns `false` to quit.
fn handle_key(puzzle: &mut dyn PuzzleOps, key: kiss3d::event::Key) -> bool {
    use kiss3d::event::Key;

    match key {
        Key::Up => drop_busy(puzzle.change_selected_index(1)),
        Key::Down => drop_busy(puzzle.change_selected_index(-1)),
        Key::Right => drop_busy(puzzle.switch_selection_type(true)),
        Key::Left => drop_busy(puzzle.switch_selection_type(false)),
        Key::Return => drop_busy(puzzle.rotate_selected_section(true)),
        Key::Back => drop_busy(puzzle.rotate_selected_section(false)),
        Key::Escape => return false,
        _ => {}
    }
    true
}

fn window_title(puzzle: &dyn PuzzleOps) -> String {
    let selection = puzzle.selection();
    format!(
        "Rubik's Cube - {:?} {} selected",
        selection.section, selection.index
    )
}

/// Moves every cubie node to its frame's transform.
///
/// Coordinate conventions:
/// - World x, y, z follow column, layer, row.
/// - The cube is centred on the origin by subtracting `center`.
fn update_scene(nodes: &mut [SceneNode3d], frames: &[CubieFrame], dim: usize, center: Vec3) {
    for frame in frames {
        let node = &mut nodes[frame.cubie as usize];
        let rotation = match &frame.rotation {
            Some(rotation) => {
                Quat::from_axis_angle(axis_vec3(rotation.axis), rotation.angle_degrees.to_radians())
            }
            None => Quat::IDENTITY,
        };
        node.set_position(to_vec3(frame.animated_position()) - center);
        node.set_rotation(rotation);
        node.set_color(cubie_color(frame.cubie, dim, frame.selected));
    }
}

/// Opens the viewer and runs until the window closes.
pub fn display(puzzle: Box<dyn PuzzleOps>, edge_length: f32) {
    pollster::block_on(display_async(puzzle, edge_length));
}

async fn display_async(mut puzzle: Box<dyn PuzzleOps>, edge_length: f32) {
    let dim = puzzle.dim();
    let mut window = Window::new(&window_title(puzzle.as_ref())).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(3.0 * dim as f32 * edge_length);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let size = CUBE_FILL * edge_length;
    let mut nodes: Vec<SceneNode3d> = (0..dim * dim * dim)
        .map(|_| scene.add_cube(size, size, size))
        .collect();

    let middle = (dim - 1) as f32 / 2.0 * edge_length;
    let center = Vec3::new(middle, middle, middle);

    loop {
        let mut title_changed = false;
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                if action == kiss3d::event::Action::Press {
                    if !handle_key(puzzle.as_mut(), key) {
                        return;
                    }
                    title_changed = true;
                }
            }
        }
        if title_changed {
            window.set_title(&window_title(puzzle.as_ref()));
        }

        // one animation step per rendered frame
        puzzle.tick();
        update_scene(&mut nodes, &puzzle.frames(), dim, center);

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
