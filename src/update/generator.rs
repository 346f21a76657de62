//! Generator update handlers

use crate::commands::Cmd;
use crate::messages::GeneratorMsg;
use crate::model::AppModel;

/// Forward custom-toolbar interaction to the active generator
///
/// When the generator asks for a redraw its output may have changed, so the
/// headings are regenerated before the host re-renders.
pub fn update_generator(model: &mut AppModel, msg: GeneratorMsg) -> Option<Cmd> {
    let Some(generator) = model.generator.as_mut() else {
        tracing::debug!(?msg, "no generator, ignoring message");
        return None;
    };

    let cmd = generator.update(msg);
    if cmd.as_ref().is_some_and(Cmd::needs_redraw) {
        model.regenerate();
    }
    cmd
}
