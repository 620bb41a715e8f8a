use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use duel_tetris::core::{Board, DuelFrame};
use duel_tetris::term::{DuelView, FrameBuffer, MIN_VIEWPORT};
use duel_tetris::types::Outcome;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
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

// Both gates live in one test so no other test thread allocates while
// counting is enabled.
#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut board = Board::new(1);
    let mut other = Board::new(2);
    let view = DuelView::new();
    let mut fb = FrameBuffer::new(MIN_VIEWPORT.width, MIN_VIEWPORT.height);

    let board_allocs = with_alloc_counting(|| {
        for i in 0..500u32 {
            board.try_move(-1, 0);
            board.rotate();
            board.try_move(1, 0);
            if !board.try_move(0, 1) {
                board.lock_and_clear();
                board.spawn();
            }
            if i % 50 == 0 {
                other.add_garbage(2);
            }
            if board.is_terminal() {
                board.reset();
            }
            if other.is_terminal() {
                other.reset();
            }
        }
    });
    assert_eq!(board_allocs, 0);

    let frame = DuelFrame {
        boards: [board.snapshot(), other.snapshot()],
        scores: [120, 40],
        outcome: Some(Outcome::Draw),
    };
    let render_allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            let _ = frame.fingerprint();
            view.render_into(&frame, MIN_VIEWPORT, &mut fb);
        }
    });
    assert_eq!(render_allocs, 0);
}
