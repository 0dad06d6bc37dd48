//! Hand-drawn 7x7 grids with distances that can be checked by eye.
//!
//! - [`serpentine_7x7`]: one corridor snaking from `(1,1)` to `(5,5)`, 16 moves long.
//! - [`serpentine_7x7_stamped`]: the same corridor with `S` and `G` marked.
//! - [`forked_7x7`]: two equal-length branches leaving `(3,1)`, ending at
//!   `(1,5)` and `(5,5)`.

use warren_grid::Grid;

pub const SERPENTINE: &str = "\
#######
#     #
##### #
#     #
# #####
#     #
#######
";

pub const SERPENTINE_STAMPED: &str = "\
#######
#S    #
##### #
#     #
# #####
#    G#
#######
";

pub const FORKED: &str = "\
#######
#     #
# ### #
# ### #
# ### #
# ### #
#######
";

fn parse(text: &str) -> Grid {
    Grid::from_ascii(text).expect("fixture grid must parse")
}

pub fn serpentine_7x7() -> Grid {
    parse(SERPENTINE)
}

pub fn serpentine_7x7_stamped() -> Grid {
    parse(SERPENTINE_STAMPED)
}

pub fn forked_7x7() -> Grid {
    parse(FORKED)
}
