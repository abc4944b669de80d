use std::collections::HashSet;

use desktop_runtime::{
    reduce_desktop, try_reduce_desktop, Anchor, DesktopAction, DesktopState, InteractionState,
    PointerPosition, Position, ReducerError, ResizeEdge, Size, Viewport,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use virtual_fs::{builtin_catalog, FileRegistry};

const FILE_IDS: [&str; 10] = [
    "readme",
    "cv",
    "projects",
    "project-1",
    "project-2",
    "project-3",
    "hobbies",
    "music",
    "pastimes",
    "drafts",
];

struct Desktop {
    files: FileRegistry,
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn at(width: f64, height: f64) -> Self {
        let mut desktop = Self {
            files: builtin_catalog().expect("catalog"),
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        };
        desktop.apply(DesktopAction::ViewportChanged {
            viewport: Viewport::new(width, height),
        });
        desktop
    }

    fn apply(&mut self, action: DesktopAction) {
        reduce_desktop(&mut self.state, &mut self.interaction, &self.files, action);
    }

    fn open(&mut self, id: &str) {
        self.apply(DesktopAction::OpenFile {
            file_id: id.into(),
        });
    }

    fn resize(&mut self, id: &str, edge: ResizeEdge, dx: f64, dy: f64) {
        let start = PointerPosition::new(500.0, 500.0);
        self.apply(DesktopAction::BeginResize {
            window_id: id.into(),
            edge,
            pointer: start,
        });
        self.apply(DesktopAction::UpdateResize {
            pointer: PointerPosition::new(start.x + dx, start.y + dy),
        });
        self.apply(DesktopAction::EndResize);
    }

    fn z_of(&self, id: &str) -> u32 {
        self.state.window(id).expect("window").z_index
    }
}

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Close(usize),
    Minimize(usize),
    Focus(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let index = 0..FILE_IDS.len();
    prop_oneof![
        3 => index.clone().prop_map(Op::Open),
        1 => index.clone().prop_map(Op::Close),
        1 => index.clone().prop_map(Op::Minimize),
        1 => index.prop_map(Op::Focus),
    ]
}

proptest! {
    #[test]
    fn at_most_one_window_per_file(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut desktop = Desktop::at(1920.0, 1080.0);
        for op in ops {
            let action = match op {
                Op::Open(i) => DesktopAction::OpenFile { file_id: FILE_IDS[i].into() },
                Op::Close(i) => DesktopAction::CloseWindow { window_id: FILE_IDS[i].into() },
                Op::Minimize(i) => DesktopAction::MinimizeWindow { window_id: FILE_IDS[i].into() },
                Op::Focus(i) => DesktopAction::FocusWindow { window_id: FILE_IDS[i].into() },
            };
            desktop.apply(action);

            let mut seen = HashSet::new();
            for win in &desktop.state.windows {
                prop_assert!(seen.insert(win.id.clone()), "duplicate window {}", win.id);
            }
        }
    }

    #[test]
    fn opened_or_focused_window_is_strictly_on_top(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut desktop = Desktop::at(1920.0, 1080.0);
        for op in ops {
            let target = match op {
                Op::Open(i) => {
                    desktop.open(FILE_IDS[i]);
                    Some(FILE_IDS[i])
                }
                Op::Focus(i) => {
                    let tracked = desktop.state.window(FILE_IDS[i]).is_some();
                    desktop.apply(DesktopAction::FocusWindow { window_id: FILE_IDS[i].into() });
                    tracked.then_some(FILE_IDS[i])
                }
                Op::Close(i) => {
                    desktop.apply(DesktopAction::CloseWindow { window_id: FILE_IDS[i].into() });
                    None
                }
                Op::Minimize(i) => {
                    desktop.apply(DesktopAction::MinimizeWindow { window_id: FILE_IDS[i].into() });
                    None
                }
            };

            if let Some(id) = target {
                let top = desktop.z_of(id);
                prop_assert!(!desktop.state.window(id).expect("window").minimized);
                for win in desktop.state.windows.iter().filter(|w| w.id.as_str() != id) {
                    prop_assert!(win.z_index < top, "{} not below {}", win.id, id);
                }
            }
        }
    }

    #[test]
    fn east_resize_stays_within_bounds(
        width in 1280.0f64..3000.0,
        height in 720.0f64..2000.0,
        dx in -3000.0f64..3000.0,
    ) {
        let mut desktop = Desktop::at(width, height);
        desktop.open("readme");
        desktop.resize("readme", ResizeEdge::East, dx, 0.0);

        let w = desktop.state.window("readme").expect("window").size.width;
        let max = 1200.0f64.min(0.85 * width);
        prop_assert!((400.0..=max).contains(&w), "width {w} outside [400, {max}]");
    }

    #[test]
    fn west_resize_keeps_right_edge_fixed(
        width in 1280.0f64..3000.0,
        dx in -3000.0f64..3000.0,
    ) {
        let mut desktop = Desktop::at(width, 1080.0);
        desktop.open("cv");
        let before = desktop.state.window("cv").expect("window").rect();

        desktop.resize("cv", ResizeEdge::West, dx, 0.0);

        let after = desktop.state.window("cv").expect("window").rect();
        prop_assert!(((after.x - before.x) - (before.w - after.w)).abs() < 1e-6);
        prop_assert!((after.right() - before.right()).abs() < 1e-6);
    }
}

#[test]
fn maximize_round_trip_restores_exact_geometry() {
    let mut desktop = Desktop::at(1600.0, 900.0);
    desktop.open("projects");
    desktop.apply(DesktopAction::MoveWindow {
        window_id: "projects".into(),
        position: Position::new(123.5, 77.25),
    });
    desktop.apply(DesktopAction::ResizeWindow {
        window_id: "projects".into(),
        size: Size::new(812.0, 455.0),
    });
    let before = desktop.state.window("projects").expect("window").rect();

    for _ in 0..2 {
        desktop.apply(DesktopAction::ToggleMaximize {
            window_id: "projects".into(),
        });
    }

    let after = desktop.state.window("projects").expect("window");
    assert!(!after.maximized);
    assert_eq!(after.rect(), before);
}

#[test]
fn anchored_window_repositions_proportionally() {
    let mut desktop = Desktop::at(1920.0, 1080.0);
    desktop.open("readme");
    desktop.state.windows[0].anchor = Some(Anchor { x: 0.5, y: 0.4 });

    desktop.apply(DesktopAction::ViewportChanged {
        viewport: Viewport::new(1280.0, 720.0),
    });

    let position = desktop.state.window("readme").expect("window").position;
    assert!((position.x - 640.0).abs() < 1e-9);
    assert!((position.y - 288.0).abs() < 1e-9);
}

#[test]
fn closing_twice_equals_closing_once() {
    let mut desktop = Desktop::at(1920.0, 1080.0);
    desktop.open("readme");
    desktop.open("music");

    desktop.apply(DesktopAction::CloseWindow {
        window_id: "music".into(),
    });
    let once = desktop.state.clone();
    desktop.apply(DesktopAction::CloseWindow {
        window_id: "music".into(),
    });

    assert_eq!(desktop.state, once);
}

#[test]
fn reopening_a_minimized_window_restores_it_on_top() {
    let mut desktop = Desktop::at(1920.0, 1080.0);
    desktop.open("cv");
    desktop.open("hobbies");
    desktop.apply(DesktopAction::MinimizeWindow {
        window_id: "cv".into(),
    });
    desktop.open("cv");

    let cv_windows: Vec<_> = desktop
        .state
        .windows
        .iter()
        .filter(|w| w.id.as_str() == "cv")
        .collect();
    assert_eq!(cv_windows.len(), 1);
    assert!(!cv_windows[0].minimized);
    assert_eq!(Some(desktop.z_of("cv")), desktop.state.max_z_index());
    assert!(desktop.z_of("hobbies") < desktop.z_of("cv"));
}

#[test]
fn small_viewport_gates_every_window_operation() {
    let mut desktop = Desktop::at(1920.0, 1080.0);
    desktop.open("readme");
    desktop.apply(DesktopAction::ViewportChanged {
        viewport: Viewport::new(1024.0, 600.0),
    });
    assert!(!desktop.state.is_resolution_supported());

    let gated = desktop.state.clone();
    for action in [
        DesktopAction::OpenFile {
            file_id: "cv".into(),
        },
        DesktopAction::FocusWindow {
            window_id: "readme".into(),
        },
        DesktopAction::CloseWindow {
            window_id: "readme".into(),
        },
        DesktopAction::ToggleMaximize {
            window_id: "readme".into(),
        },
        DesktopAction::BeginMove {
            window_id: "readme".into(),
            pointer: PointerPosition::new(10.0, 10.0),
        },
    ] {
        let result = try_reduce_desktop(
            &mut desktop.state,
            &mut desktop.interaction,
            &desktop.files,
            action,
        );
        assert_eq!(result, Err(ReducerError::ResolutionUnsupported));
    }
    assert_eq!(desktop.state, gated);

    desktop.apply(DesktopAction::ViewportChanged {
        viewport: Viewport::new(1280.0, 720.0),
    });
    desktop.open("cv");
    assert_eq!(desktop.state.windows.len(), 2);
}
