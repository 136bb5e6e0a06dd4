//! Shapescene session demo: drives a viewer through a scripted session.
//!
//! Usage:
//! ```text
//! cargo run --example session                  # every shape
//! cargo run --example session -- house sword   # only the named shapes
//! RUST_LOG=shapescene=debug cargo run --example session
//! ```

use shapescene::operations::query::{BoundingBox, IsClosed};
use shapescene::operations::transform::Axis;
use shapescene::scene::{NamedColor, PanelEdit};
use shapescene::shapes::ShapeKind;
use shapescene::viewer::{Viewer, ViewerConfig};
use shapescene::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for shapescene.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shapescene=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("shapescene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let kinds = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<ShapeKind>())
        .collect::<Result<Vec<_>>>()?;
    let kinds = if kinds.is_empty() {
        ShapeKind::ALL.to_vec()
    } else {
        kinds
    };

    let mut viewer = Viewer::new(ViewerConfig::default())?;

    // Lay the shapes out in a row and give each one a turn in the panel.
    for (slot, kind) in kinds.into_iter().enumerate() {
        let id = viewer.insert(kind)?;
        #[allow(clippy::cast_precision_loss)]
        let x = -4.0 + 1.5 * slot as f64;
        viewer.edit(PanelEdit::Position(Axis::X, x))?;
        viewer.edit(PanelEdit::Rotation(Axis::Y, 20.0))?;
        if kind.is_extruded() {
            viewer.edit(PanelEdit::ColorItem(NamedColor::Blue))?;
        }

        let object = viewer.scene().object(id)?;
        let mesh = object.mesh();
        let bounds = BoundingBox::new(mesh).execute()?;
        println!(
            "{:<9} vertices={:<4} indices={:<5} closed={} size=({:.2}, {:.2}, {:.2})",
            object.name,
            mesh.vertices.len(),
            mesh.indices.len(),
            IsClosed::new(mesh).execute(),
            bounds.size().x,
            bounds.size().y,
            bounds.size().z,
        );
    }

    // Click the middle of the window, then a corner.
    for (x, y) in [(640.0, 360.0), (0.0, 0.0)] {
        match viewer.click(x, y, 0xff_80_00)? {
            Some(id) => println!("click ({x}, {y}) -> {}", viewer.scene().object(id)?.name),
            None => println!("click ({x}, {y}) -> nothing"),
        }
    }

    viewer.resize(800.0, 800.0)?;
    viewer.edit(PanelEdit::Home)?;
    println!("draw list: {} objects", viewer.draw_list().len());
    Ok(())
}
