use controller::Action;
use web_sys::File;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Files,
    Folder,
}

pub enum Msg {
    /// Feeds one action to the workspace controller.
    Workspace(Action),
    FilesChosen {
        field: &'static str,
        files: Vec<File>,
    },
    OpenPicker(Picker),
}

impl From<Action> for Msg {
    fn from(action: Action) -> Self {
        Msg::Workspace(action)
    }
}
