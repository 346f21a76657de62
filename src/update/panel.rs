//! Panel update handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;

/// Handle panel messages (outline toggle, side-tab selection)
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    let cmd = model.panel.handle(msg)?;

    // Session restore wants every visibility change on disk
    if model.config.restore_state && model.session_path.is_some() {
        Some(Cmd::Batch(vec![cmd, Cmd::PersistState]))
    } else {
        Some(cmd)
    }
}
