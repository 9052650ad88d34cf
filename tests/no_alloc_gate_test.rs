use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::mock::StepRng;

use tui_2048::core::{transform, Board, Game, GameConfig};
use tui_2048::term::{FrameBuffer, GameView, TileAnimator, Viewport};
use tui_2048::types::{Cell, Direction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn move_and_render_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    #[rustfmt::skip]
    let board = Board::from_values(&[
        2, 0, 0, 4,
        0, 8, 0, 0,
        0, 0, 16, 0,
        32, 0, 0, 2,
    ]);
    let mut game = Game::new(GameConfig::default(), TileAnimator::new(), StepRng::new(0, 0));
    game.load_board(board);
    let line = [Cell::Tile(2), Cell::Tile(2), Cell::Empty, Cell::Tile(4)];

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    // Warm-up: registers logging callsites and grows the highlight list to its
    // steady-state size.
    for _ in 0..50 {
        let _ = game.apply_move(Direction::Right);
        let _ = game.apply_move(Direction::Left);
        game.observer_mut().advance(16);
    }
    view.render_into(&game, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = transform(&line);
        }

        // Sliding back and forth keeps every move board-changing without merges.
        for _ in 0..50 {
            let _ = game.apply_move(Direction::Right);
            let _ = game.apply_move(Direction::Left);
            game.observer_mut().advance(16);
        }

        for _ in 0..20 {
            view.render_into(&game, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
