mod report;
mod scene_file;

use std::path::PathBuf;

use anyhow::Result;

use neo_engine::logging::{init_logging, LoggingConfig};
use neo_ui::animation::{StepDriver, DEFAULT_LENGTH};
use neo_ui::scene::NeoScene;
use neo_ui::widget::Widget;

use scene_file::{Built, SceneFile};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let file = SceneFile::load(path.as_deref())?;
    let viewport = file.canvas.viewport();
    log::info!(
        "scene: {} widget(s) on a {}x{} canvas",
        file.widgets.len(),
        viewport.width,
        viewport.height
    );

    let mut scene = NeoScene::new(viewport);
    let mut driver = StepDriver::default();

    for (index, spec) in file.widgets.iter().enumerate() {
        let widget: Box<dyn Widget> = match spec.build(&file.style) {
            Built::Button { mut button, press } => {
                if press && !button.press(&mut driver)? {
                    log::warn!("press animation on widget {index} did not complete");
                }
                Box::new(button)
            }
            Built::Frame(frame) => Box::new(frame),
            Built::Progress { mut view, animate_to } => {
                if let Some(to) = animate_to {
                    view.animate_progress(to, DEFAULT_LENGTH, &mut driver)?;
                }
                Box::new(view)
            }
        };

        let ops = scene.render(widget.as_ref());
        println!("#{index} {} ({} ops)", spec.kind(), ops.len());
        for (n, op) in ops.iter().enumerate() {
            println!("  {n:>2}  {}", report::describe(op));
        }
    }

    Ok(())
}
