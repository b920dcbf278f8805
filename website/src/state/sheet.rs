/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

/// The mobile navigation bottom sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sheet {
    #[default]
    Closed,
    Open,
}

/// Things the user can do while the sheet is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// The hamburger trigger was pressed.
    Trigger,
    Backdrop,
    CloseButton,
    Escape,
    /// A navigation link inside the sheet was followed.
    LinkActivated,
}

impl Sheet {
    pub fn on(self, event: SheetEvent) -> Sheet {
        match event {
            SheetEvent::Trigger => Sheet::Open,
            SheetEvent::Backdrop
            | SheetEvent::CloseButton
            | SheetEvent::Escape
            | SheetEvent::LinkActivated => Sheet::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Sheet::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_opens() {
        assert!(Sheet::Closed.on(SheetEvent::Trigger).is_open());
    }

    #[test]
    fn every_dismissal_closes() {
        for event in [
            SheetEvent::Backdrop,
            SheetEvent::CloseButton,
            SheetEvent::Escape,
            SheetEvent::LinkActivated,
        ] {
            assert_eq!(Sheet::Open.on(event), Sheet::Closed, "{event:?}");
        }
    }

    #[test]
    fn escape_while_closed_stays_closed() {
        assert_eq!(Sheet::Closed.on(SheetEvent::Escape), Sheet::Closed);
    }
}
