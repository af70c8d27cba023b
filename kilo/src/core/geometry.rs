// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GeometryQueryError, TerminalDevice};

/// The visible size of the terminal in character cells. Both fields are positive once
/// [`Self::query()`] has succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub rows: u16,
    pub cols: u16,
}

impl ViewportGeometry {
    /// Ask `device` for its window size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError::Query`] if the device query fails, and
    /// [`GeometryQueryError::DegenerateSize`] if it reports zero columns (some
    /// environments do this instead of failing) or zero rows.
    pub fn query(device: &impl TerminalDevice) -> Result<Self, GeometryQueryError> {
        let size = device.window_size().map_err(GeometryQueryError::Query)?;

        if size.cols == 0 || size.rows == 0 {
            return Err(GeometryQueryError::DegenerateSize {
                rows: size.rows,
                cols: size.cols,
            });
        }

        let it = Self {
            rows: size.rows,
            cols: size.cols,
        };
        tracing::debug!(message = "ViewportGeometry::query", geometry = ?it);
        Ok(it)
    }
}
