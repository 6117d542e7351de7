use proptest::prelude::*;

use tui_pong::input::{paddle_x_for_pointer, SharedPointer};
use tui_pong::types::{Arena, CellScale, PADDLE_WIDTH};

proptest! {
    #[test]
    fn paddle_stays_inside_the_arena(
        width in 100i32..4000,
        height in 200i32..3000,
        offset in -1000i32..1000,
        pick_far_side in any::<bool>(),
    ) {
        let arena = Arena::new(width, height);
        let pointer_x = if pick_far_side { width + offset } else { offset };
        let x = paddle_x_for_pointer(pointer_x, arena);
        prop_assert!(x >= 0);
        prop_assert!(x + PADDLE_WIDTH <= width);
    }

    #[test]
    fn paddle_centers_on_pointer_when_room(width in 300i32..4000, frac in 0.0f64..1.0) {
        let arena = Arena::new(width, 600);
        let lo = PADDLE_WIDTH / 2;
        let hi = width - PADDLE_WIDTH / 2;
        let pointer_x = lo + ((hi - lo) as f64 * frac) as i32;
        prop_assert_eq!(paddle_x_for_pointer(pointer_x, arena), pointer_x - PADDLE_WIDTH / 2);
    }

    #[test]
    fn any_reported_cell_yields_a_legal_paddle(col in any::<u16>(), row in any::<u16>()) {
        let scale = CellScale::new(8, 16);
        let arena = scale.arena_for(80, 24);
        let pointer = SharedPointer::new(0);
        pointer.track(col, row, arena, scale);
        prop_assert!((0..=arena.max_paddle_x()).contains(&pointer.paddle_x()));
        prop_assert_eq!(pointer.cell(), (col, row));
    }
}
