//! Property-based tests for fullscreen toggling.
//!
//! The controller never assumes a state: every toggle issues exactly one
//! document call, chosen by what the document reports at that moment.

use std::cell::{Cell, RefCell};

use proptest::prelude::*;
use urlview::managers::page_controller::{PageController, PageControllerTrait};
use urlview::services::document::DocumentController;
use urlview::types::errors::FullscreenError;
use urlview::types::viewer::FullscreenAction;

/// Document whose reported state is scripted independently of the calls it
/// receives, e.g. the user pressing Escape behind the app's back.
struct ScriptedDocument {
    reported: Cell<bool>,
    calls: RefCell<Vec<FullscreenAction>>,
    fail: bool,
}

impl DocumentController for ScriptedDocument {
    fn is_fullscreen(&self) -> bool {
        self.reported.get()
    }

    fn request_fullscreen(&self) -> Result<(), FullscreenError> {
        self.calls.borrow_mut().push(FullscreenAction::Enter);
        if self.fail {
            Err(FullscreenError::Denied("denied".into()))
        } else {
            Ok(())
        }
    }

    fn exit_fullscreen(&self) -> Result<(), FullscreenError> {
        self.calls.borrow_mut().push(FullscreenAction::Exit);
        if self.fail {
            Err(FullscreenError::Unsupported("unsupported".into()))
        } else {
            Ok(())
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn toggle_follows_reported_state(
        states in prop::collection::vec(any::<bool>(), 1..40),
        fail in any::<bool>(),
    ) {
        let controller = PageController::new("none");
        let doc = ScriptedDocument {
            reported: Cell::new(false),
            calls: RefCell::new(Vec::new()),
            fail,
        };

        for (i, &is_fullscreen) in states.iter().enumerate() {
            doc.reported.set(is_fullscreen);
            let action = controller.toggle_fullscreen(&doc);
            let expected = if is_fullscreen { FullscreenAction::Exit } else { FullscreenAction::Enter };
            prop_assert_eq!(action, expected);
            prop_assert_eq!(doc.calls.borrow().len(), i + 1);
            prop_assert_eq!(doc.calls.borrow()[i], expected);
        }
    }
}
