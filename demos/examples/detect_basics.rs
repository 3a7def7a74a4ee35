// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision detection basics.
//!
//! Builds an engine over a small dashboard layout and walks through the
//! decisions a state store would ask for while the user drags a widget.
//!
//! Run:
//! - `cargo run -p dashgrid_demos --example detect_basics`

use dashgrid_collision::{CollisionEngine, CollisionPolicy, EngineError, Rect, Widget};

fn main() -> Result<(), EngineError> {
    let widgets: Vec<Widget> = vec![
        Widget::new("widget1", "chart", Rect::new(0, 0, 2, 2)),
        Widget::new("widget2", "feed", Rect::new(3, 0, 2, 2)),
        Widget::new("widget3", "notes", Rect::new(0, 3, 3, 2)).locked(true),
    ];
    let engine = CollisionEngine::from_descriptor(widgets, "5x5", CollisionPolicy::default())?;

    // A 3x3 drop in the top-left corner only lands on widget1; the others
    // merely touch the region's edges.
    let hit = engine.detect_collision(Rect::new(0, 0, 3, 3), None)?;
    println!("== detect 3x3 at (0, 0) ==");
    println!("  collision: {}", hit.has_collision);
    for w in &hit.colliding {
        println!("  colliding: {} at {:?}", w.id, w.rect);
    }
    println!("  swappable: {:?}", hit.swappable.map(|w| w.id.as_str()));
    println!("  suggested: {:?}", hit.suggested);

    // Where could a 2x2 widget still go?
    println!("== free 2x2 spots ==");
    for spot in engine.find_empty_spaces(2, 2)? {
        println!("  {:?}", spot);
    }
    Ok(())
}
