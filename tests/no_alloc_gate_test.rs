use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ascii_donut::core::{render, FrameBuffer};
use ascii_donut::term::encode_frame_into;

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

#[test]
fn render_and_encode_are_allocation_free_after_warmup() {
    let mut fb = FrameBuffer::try_new(80, 24).unwrap();
    let mut out = Vec::with_capacity(64 * 1024);

    // Warm-up.
    render(0.0, 0.0, 4, &mut fb);
    encode_frame_into(&fb, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        let (mut a, mut b) = (0.0f32, 0.0f32);
        for _ in 0..50 {
            render(a, b, 4, &mut fb);
            out.clear();
            encode_frame_into(&fb, &mut out).unwrap();
            a += 0.04;
            b += 0.02;
        }
    });

    assert_eq!(allocs, 0);
}
