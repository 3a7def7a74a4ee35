// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push-based displacement.
//!
//! Drags a widget onto its neighbors and prints the resolved layout,
//! including the degraded case where a full grid leaves a widget unresolved.
//!
//! Run:
//! - `cargo run -p dashgrid_demos --example push_cascade`

use dashgrid_collision::{CollisionEngine, CollisionPolicy, EngineError, Rect, Widget};

fn print_layout(widgets: &[Widget]) {
    for w in widgets {
        let lock = if w.locked { " (locked)" } else { "" };
        println!("  {} at {:?}{}", w.id, w.rect, lock);
    }
}

fn main() -> Result<(), EngineError> {
    let widgets: Vec<Widget> = vec![
        Widget::new("widget1", "chart", Rect::new(0, 0, 2, 2)),
        Widget::new("widget2", "feed", Rect::new(3, 0, 2, 2)),
        Widget::new("widget3", "notes", Rect::new(0, 3, 3, 2)).locked(true),
    ];
    let engine =
        CollisionEngine::from_descriptor(widgets, "5x5", CollisionPolicy::default())?;

    // Drag widget1 one column right: it lands on widget2, which gets pushed
    // to the nearest free space; the locked widget3 never moves.
    let out = engine.push_widgets("widget1", Rect::new(2, 0, 2, 2))?;
    println!("== after pushing widget1 to (2, 0) ==");
    print_layout(&out.widgets);

    // On a packed 1x1 grid there is nowhere to push to; the displaced widget
    // keeps its rect and is flagged instead.
    let packed = CollisionEngine::from_descriptor(
        vec![
            Widget::new("a", "chart", Rect::new(0, 0, 1, 1)),
            Widget::new("b", "feed", Rect::new(0, 0, 1, 1)),
        ],
        "1x1",
        CollisionPolicy::default(),
    )?;
    let out = packed.push_widgets("a", Rect::new(0, 0, 1, 1))?;
    println!("== full-grid push ==");
    print_layout(&out.widgets);
    println!("  unresolved: {:?}", out.unresolved);
    Ok(())
}
