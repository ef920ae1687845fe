use crate::{
    coord::{CoordIJK, FaceIJK},
    error, Direction, Face,
};
use std::fmt;

/// Sentinel marking the absence of a neighbor in [`BASE_CELL_NEIGHBORS`].
const INVALID: u8 = u8::MAX;

/// Maximum value for a base cell.
pub const MAX: u8 = 121;

// Bitmap where a bit's position represents a base cell value.
const BASE_PENTAGONS: u128 = 0x0020_0802_0008_0100_8402_0040_0100_4010;

/// Home face, normalized `IJK` coordinates on that face, and (for pentagons)
/// the two faces on which the missing sub-sequence is clockwise instead of
/// counterclockwise, for each of the 122 base cells.
struct BaseCellInfo {
    face: u8,
    coord: (i32, i32, i32),
    cw_offset_faces: (i8, i8),
}

macro_rules! bc {
    ($face:literal, [$i:literal, $j:literal, $k:literal], $cw:expr) => {
        BaseCellInfo {
            face: $face,
            coord: ($i, $j, $k),
            cw_offset_faces: $cw,
        }
    };
}

#[rustfmt::skip]
static BASE_CELL_DATA: [BaseCellInfo; MAX as usize + 1] = [
    bc!(1,  [1, 0, 0], (-1, -1)), // base cell 0
    bc!(2,  [1, 1, 0], (-1, -1)), // base cell 1
    bc!(1,  [0, 0, 0], (-1, -1)), // base cell 2
    bc!(2,  [1, 0, 0], (-1, -1)), // base cell 3
    bc!(0,  [2, 0, 0], (-1, -1)), // base cell 4 (pentagon)
    bc!(1,  [1, 1, 0], (-1, -1)), // base cell 5
    bc!(1,  [0, 0, 1], (-1, -1)), // base cell 6
    bc!(2,  [0, 0, 0], (-1, -1)), // base cell 7
    bc!(0,  [1, 0, 0], (-1, -1)), // base cell 8
    bc!(2,  [0, 1, 0], (-1, -1)), // base cell 9
    bc!(1,  [0, 1, 0], (-1, -1)), // base cell 10
    bc!(1,  [0, 1, 1], (-1, -1)), // base cell 11
    bc!(3,  [1, 0, 0], (-1, -1)), // base cell 12
    bc!(3,  [1, 1, 0], (-1, -1)), // base cell 13
    bc!(11, [2, 0, 0], (2, 6)),   // base cell 14 (pentagon)
    bc!(4,  [1, 0, 0], (-1, -1)), // base cell 15
    bc!(0,  [0, 0, 0], (-1, -1)), // base cell 16
    bc!(6,  [0, 1, 0], (-1, -1)), // base cell 17
    bc!(0,  [0, 0, 1], (-1, -1)), // base cell 18
    bc!(2,  [0, 1, 1], (-1, -1)), // base cell 19
    bc!(7,  [0, 0, 1], (-1, -1)), // base cell 20
    bc!(2,  [0, 0, 1], (-1, -1)), // base cell 21
    bc!(0,  [1, 1, 0], (-1, -1)), // base cell 22
    bc!(6,  [0, 0, 1], (-1, -1)), // base cell 23
    bc!(10, [2, 0, 0], (1, 5)),   // base cell 24 (pentagon)
    bc!(6,  [0, 0, 0], (-1, -1)), // base cell 25
    bc!(3,  [0, 0, 0], (-1, -1)), // base cell 26
    bc!(11, [1, 0, 0], (-1, -1)), // base cell 27
    bc!(4,  [1, 1, 0], (-1, -1)), // base cell 28
    bc!(3,  [0, 1, 0], (-1, -1)), // base cell 29
    bc!(0,  [0, 1, 1], (-1, -1)), // base cell 30
    bc!(4,  [0, 0, 0], (-1, -1)), // base cell 31
    bc!(5,  [0, 1, 0], (-1, -1)), // base cell 32
    bc!(0,  [0, 1, 0], (-1, -1)), // base cell 33
    bc!(7,  [0, 1, 0], (-1, -1)), // base cell 34
    bc!(11, [1, 1, 0], (-1, -1)), // base cell 35
    bc!(7,  [0, 0, 0], (-1, -1)), // base cell 36
    bc!(10, [1, 0, 0], (-1, -1)), // base cell 37
    bc!(12, [2, 0, 0], (3, 7)),   // base cell 38 (pentagon)
    bc!(6,  [1, 0, 1], (-1, -1)), // base cell 39
    bc!(7,  [1, 0, 1], (-1, -1)), // base cell 40
    bc!(4,  [0, 0, 1], (-1, -1)), // base cell 41
    bc!(3,  [0, 0, 1], (-1, -1)), // base cell 42
    bc!(3,  [0, 1, 1], (-1, -1)), // base cell 43
    bc!(4,  [0, 1, 0], (-1, -1)), // base cell 44
    bc!(6,  [1, 0, 0], (-1, -1)), // base cell 45
    bc!(11, [0, 0, 0], (-1, -1)), // base cell 46
    bc!(8,  [0, 0, 1], (-1, -1)), // base cell 47
    bc!(5,  [0, 0, 1], (-1, -1)), // base cell 48
    bc!(14, [2, 0, 0], (0, 9)),   // base cell 49 (pentagon)
    bc!(5,  [0, 0, 0], (-1, -1)), // base cell 50
    bc!(12, [1, 0, 0], (-1, -1)), // base cell 51
    bc!(10, [1, 1, 0], (-1, -1)), // base cell 52
    bc!(4,  [0, 1, 1], (-1, -1)), // base cell 53
    bc!(12, [1, 1, 0], (-1, -1)), // base cell 54
    bc!(7,  [1, 0, 0], (-1, -1)), // base cell 55
    bc!(11, [0, 1, 0], (-1, -1)), // base cell 56
    bc!(10, [0, 0, 0], (-1, -1)), // base cell 57
    bc!(13, [2, 0, 0], (4, 8)),   // base cell 58 (pentagon)
    bc!(10, [0, 0, 1], (-1, -1)), // base cell 59
    bc!(11, [0, 0, 1], (-1, -1)), // base cell 60
    bc!(9,  [0, 1, 0], (-1, -1)), // base cell 61
    bc!(8,  [0, 1, 0], (-1, -1)), // base cell 62
    bc!(6,  [2, 0, 0], (11, 15)), // base cell 63 (pentagon)
    bc!(8,  [0, 0, 0], (-1, -1)), // base cell 64
    bc!(9,  [0, 0, 1], (-1, -1)), // base cell 65
    bc!(14, [1, 0, 0], (-1, -1)), // base cell 66
    bc!(5,  [1, 0, 1], (-1, -1)), // base cell 67
    bc!(16, [0, 1, 1], (-1, -1)), // base cell 68
    bc!(8,  [1, 0, 1], (-1, -1)), // base cell 69
    bc!(5,  [1, 0, 0], (-1, -1)), // base cell 70
    bc!(12, [0, 0, 0], (-1, -1)), // base cell 71
    bc!(7,  [2, 0, 0], (12, 16)), // base cell 72 (pentagon)
    bc!(12, [0, 1, 0], (-1, -1)), // base cell 73
    bc!(10, [0, 1, 0], (-1, -1)), // base cell 74
    bc!(9,  [0, 0, 0], (-1, -1)), // base cell 75
    bc!(13, [1, 0, 0], (-1, -1)), // base cell 76
    bc!(16, [0, 0, 1], (-1, -1)), // base cell 77
    bc!(15, [0, 1, 1], (-1, -1)), // base cell 78
    bc!(15, [0, 1, 0], (-1, -1)), // base cell 79
    bc!(16, [0, 1, 0], (-1, -1)), // base cell 80
    bc!(14, [1, 1, 0], (-1, -1)), // base cell 81
    bc!(13, [1, 1, 0], (-1, -1)), // base cell 82
    bc!(5,  [2, 0, 0], (10, 19)), // base cell 83 (pentagon)
    bc!(8,  [1, 0, 0], (-1, -1)), // base cell 84
    bc!(14, [0, 0, 0], (-1, -1)), // base cell 85
    bc!(9,  [1, 0, 1], (-1, -1)), // base cell 86
    bc!(14, [0, 0, 1], (-1, -1)), // base cell 87
    bc!(17, [0, 0, 1], (-1, -1)), // base cell 88
    bc!(12, [0, 0, 1], (-1, -1)), // base cell 89
    bc!(16, [0, 0, 0], (-1, -1)), // base cell 90
    bc!(17, [0, 1, 1], (-1, -1)), // base cell 91
    bc!(15, [0, 0, 1], (-1, -1)), // base cell 92
    bc!(16, [1, 0, 1], (-1, -1)), // base cell 93
    bc!(9,  [1, 0, 0], (-1, -1)), // base cell 94
    bc!(15, [0, 0, 0], (-1, -1)), // base cell 95
    bc!(13, [0, 0, 0], (-1, -1)), // base cell 96
    bc!(8,  [2, 0, 0], (13, 17)), // base cell 97 (pentagon)
    bc!(13, [0, 1, 0], (-1, -1)), // base cell 98
    bc!(17, [1, 0, 1], (-1, -1)), // base cell 99
    bc!(19, [0, 1, 0], (-1, -1)), // base cell 100
    bc!(14, [0, 1, 0], (-1, -1)), // base cell 101
    bc!(19, [0, 1, 1], (-1, -1)), // base cell 102
    bc!(17, [0, 1, 0], (-1, -1)), // base cell 103
    bc!(13, [0, 0, 1], (-1, -1)), // base cell 104
    bc!(17, [0, 0, 0], (-1, -1)), // base cell 105
    bc!(16, [1, 0, 0], (-1, -1)), // base cell 106
    bc!(9,  [2, 0, 0], (14, 18)), // base cell 107 (pentagon)
    bc!(15, [1, 0, 1], (-1, -1)), // base cell 108
    bc!(15, [1, 0, 0], (-1, -1)), // base cell 109
    bc!(18, [0, 1, 1], (-1, -1)), // base cell 110
    bc!(18, [0, 0, 1], (-1, -1)), // base cell 111
    bc!(19, [0, 0, 1], (-1, -1)), // base cell 112
    bc!(17, [1, 0, 0], (-1, -1)), // base cell 113
    bc!(19, [0, 0, 0], (-1, -1)), // base cell 114
    bc!(18, [0, 1, 0], (-1, -1)), // base cell 115
    bc!(18, [1, 0, 1], (-1, -1)), // base cell 116
    bc!(19, [2, 0, 0], (-1, -1)), // base cell 117 (polar pentagon)
    bc!(19, [1, 0, 0], (-1, -1)), // base cell 118
    bc!(18, [0, 0, 0], (-1, -1)), // base cell 119
    bc!(19, [1, 0, 1], (-1, -1)), // base cell 120
    bc!(18, [1, 0, 0], (-1, -1)), // base cell 121
];

/// For each base cell, for each direction (indexed the same way as
/// [`Direction`]), the neighboring base cell, or [`INVALID`] if the
/// pentagon has no neighbor in that direction.
#[rustfmt::skip]
static BASE_CELL_NEIGHBORS: [[u8; 7]; MAX as usize + 1] = [
    [0, 1, 5, 2, 4, 3, 8],
    [1, 7, 6, 9, 0, 3, 2],
    [2, 6, 10, 11, 0, 1, 5],
    [3, 13, 1, 7, 4, 12, 0],
    [4, INVALID, 15, 8, 3, 0, 12],
    [5, 2, 18, 10, 8, 0, 16],
    [6, 14, 11, 17, 1, 9, 2],
    [7, 21, 9, 19, 3, 13, 1],
    [8, 5, 22, 16, 4, 0, 15],
    [9, 19, 14, 20, 1, 7, 6],
    [10, 11, 24, 23, 5, 2, 18],
    [11, 17, 23, 25, 2, 6, 10],
    [12, 28, 13, 26, 4, 15, 3],
    [13, 26, 21, 29, 3, 12, 7],
    [14, INVALID, 17, 27, 9, 20, 6],
    [15, 22, 28, 31, 4, 8, 12],
    [16, 18, 33, 30, 8, 5, 22],
    [17, 11, 14, 6, 35, 25, 27],
    [18, 24, 30, 32, 5, 10, 16],
    [19, 34, 20, 36, 7, 21, 9],
    [20, 14, 19, 9, 40, 27, 36],
    [21, 38, 19, 34, 13, 29, 7],
    [22, 16, 41, 33, 15, 8, 31],
    [23, 24, 11, 10, 39, 37, 25],
    [24, INVALID, 32, 37, 10, 23, 18],
    [25, 23, 17, 11, 45, 39, 35],
    [26, 42, 29, 43, 12, 28, 13],
    [27, 40, 35, 46, 14, 20, 17],
    [28, 31, 42, 44, 12, 15, 26],
    [29, 43, 38, 47, 13, 26, 21],
    [30, 32, 48, 50, 16, 18, 33],
    [31, 41, 44, 53, 15, 22, 28],
    [32, 30, 24, 18, 52, 50, 37],
    [33, 30, 49, 48, 22, 16, 41],
    [34, 19, 38, 21, 54, 36, 51],
    [35, 46, 45, 56, 17, 27, 25],
    [36, 20, 34, 19, 55, 40, 54],
    [37, 39, 52, 57, 24, 23, 32],
    [38, INVALID, 34, 51, 29, 47, 21],
    [39, 37, 25, 23, 59, 57, 45],
    [40, 27, 36, 20, 60, 46, 55],
    [41, 49, 53, 61, 22, 33, 31],
    [42, 58, 43, 62, 28, 44, 26],
    [43, 62, 47, 64, 26, 42, 29],
    [44, 53, 58, 65, 28, 31, 42],
    [45, 39, 35, 25, 63, 59, 56],
    [46, 60, 56, 68, 27, 40, 35],
    [47, 38, 43, 29, 69, 51, 64],
    [48, 49, 30, 33, 67, 66, 50],
    [49, INVALID, 61, 66, 33, 48, 41],
    [50, 48, 32, 30, 70, 67, 52],
    [51, 69, 54, 71, 38, 47, 34],
    [52, 57, 70, 74, 32, 37, 50],
    [53, 61, 65, 75, 31, 41, 44],
    [54, 71, 55, 73, 34, 51, 36],
    [55, 40, 54, 36, 72, 60, 73],
    [56, 68, 63, 77, 35, 46, 45],
    [57, 59, 74, 78, 37, 39, 52],
    [58, INVALID, 62, 76, 44, 65, 42],
    [59, 63, 78, 79, 39, 45, 57],
    [60, 72, 68, 80, 40, 55, 46],
    [61, 53, 49, 41, 81, 75, 66],
    [62, 43, 58, 42, 82, 64, 76],
    [63, INVALID, 56, 45, 79, 59, 77],
    [64, 47, 62, 43, 84, 69, 82],
    [65, 58, 53, 44, 86, 76, 75],
    [66, 67, 81, 85, 49, 48, 61],
    [67, 66, 50, 48, 87, 85, 70],
    [68, 56, 60, 46, 90, 77, 80],
    [69, 51, 64, 47, 89, 71, 84],
    [70, 67, 52, 50, 83, 87, 74],
    [71, 89, 73, 91, 51, 69, 54],
    [72, INVALID, 73, 55, 80, 60, 88],
    [73, 91, 72, 88, 54, 71, 55],
    [74, 78, 83, 92, 52, 57, 70],
    [75, 65, 61, 53, 94, 86, 81],
    [76, 86, 82, 96, 58, 65, 62],
    [77, 63, 68, 56, 93, 79, 90],
    [78, 74, 59, 57, 95, 92, 79],
    [79, 78, 63, 59, 93, 95, 77],
    [80, 68, 72, 60, 99, 90, 88],
    [81, 85, 94, 101, 61, 66, 75],
    [82, 96, 84, 98, 62, 76, 64],
    [83, INVALID, 74, 70, 100, 87, 92],
    [84, 69, 82, 64, 97, 89, 98],
    [85, 87, 101, 102, 66, 67, 81],
    [86, 76, 75, 65, 104, 96, 94],
    [87, 83, 102, 100, 67, 70, 85],
    [88, 72, 91, 73, 99, 80, 105],
    [89, 97, 91, 103, 69, 84, 71],
    [90, 77, 80, 68, 106, 93, 99],
    [91, 73, 89, 71, 105, 88, 103],
    [92, 83, 78, 74, 108, 100, 95],
    [93, 79, 90, 77, 109, 95, 106],
    [94, 86, 81, 75, 107, 104, 101],
    [95, 92, 79, 78, 109, 108, 93],
    [96, 104, 98, 110, 76, 86, 82],
    [97, INVALID, 98, 84, 103, 89, 111],
    [98, 110, 97, 111, 82, 96, 84],
    [99, 80, 105, 88, 106, 90, 113],
    [100, 102, 83, 87, 108, 114, 92],
    [101, 102, 107, 112, 81, 85, 94],
    [102, 101, 87, 85, 114, 112, 100],
    [103, 91, 97, 89, 116, 105, 111],
    [104, 107, 110, 115, 86, 94, 96],
    [105, 88, 103, 91, 113, 99, 116],
    [106, 93, 99, 90, 117, 109, 113],
    [107, INVALID, 101, 94, 115, 104, 112],
    [108, 100, 95, 92, 118, 114, 109],
    [109, 108, 93, 95, 117, 118, 106],
    [110, 98, 104, 96, 119, 111, 115],
    [111, 97, 110, 98, 116, 103, 119],
    [112, 107, 102, 101, 120, 115, 114],
    [113, 99, 116, 105, 117, 106, 121],
    [114, 112, 100, 102, 118, 120, 108],
    [115, 110, 107, 104, 120, 119, 112],
    [116, 103, 119, 111, 113, 105, 121],
    [117, INVALID, 109, 118, 113, 121, 106],
    [118, 120, 108, 114, 117, 121, 109],
    [119, 111, 115, 110, 121, 116, 120],
    [120, 115, 114, 112, 121, 119, 118],
    [121, 116, 120, 119, 117, 113, 118],
];

/// For each base cell, for each direction, the number of 60° CCW rotations
/// to apply to reorient into the neighbor's coordinate system. Entries
/// where [`BASE_CELL_NEIGHBORS`] has no neighbor are unused placeholders.
#[rustfmt::skip]
static BASE_CELL_NEIGHBOR_ROTATIONS: [[u8; 7]; MAX as usize + 1] = [
    [0, 5, 0, 0, 1, 5, 1],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 0, 0, 0, 0, 5, 0],
    [0, 5, 0, 0, 2, 5, 1],
    [0, 0, 1, 0, 3, 4, 2],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 0, 0, 3, 5, 5, 0],
    [0, 0, 0, 0, 0, 5, 0],
    [0, 5, 0, 0, 0, 5, 1],
    [0, 0, 1, 3, 0, 0, 1],
    [0, 0, 1, 3, 0, 0, 1],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 5, 0, 0, 3, 5, 1],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 5, 0, 0, 4, 5, 1],
    [0, 0, 0, 0, 0, 5, 0],
    [0, 3, 3, 3, 3, 0, 3],
    [0, 0, 0, 3, 5, 5, 0],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 3, 3, 3, 0, 3, 0],
    [0, 0, 0, 3, 5, 5, 0],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 3, 3, 3, 0, 3, 0],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 0, 0, 3, 0, 0, 3],
    [0, 0, 0, 0, 0, 5, 0],
    [0, 3, 0, 0, 0, 3, 3],
    [0, 0, 1, 0, 1, 0, 1],
    [0, 0, 1, 3, 0, 0, 1],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 5, 0],
    [0, 3, 3, 3, 3, 0, 3],
    [0, 0, 1, 3, 0, 0, 1],
    [0, 3, 3, 3, 3, 0, 3],
    [0, 0, 3, 0, 3, 0, 3],
    [0, 0, 0, 3, 0, 0, 3],
    [0, 3, 0, 0, 0, 3, 3],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 3, 0, 0, 3, 3, 0],
    [0, 3, 0, 0, 3, 3, 0],
    [0, 0, 0, 3, 5, 5, 0],
    [0, 0, 0, 3, 5, 5, 0],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 1, 3, 0, 0, 1],
    [0, 0, 3, 0, 0, 3, 3],
    [0, 0, 0, 3, 0, 3, 0],
    [0, 3, 3, 3, 0, 3, 0],
    [0, 3, 3, 3, 0, 3, 0],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 0, 0, 3, 0, 0, 3],
    [0, 3, 0, 0, 0, 3, 3],
    [0, 0, 3, 0, 3, 0, 3],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 3, 0, 3, 0, 3],
    [0, 0, 3, 0, 0, 3, 3],
    [0, 3, 3, 3, 0, 0, 3],
    [0, 0, 0, 3, 0, 3, 0],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 3, 3, 3, 3, 3, 0],
    [0, 3, 3, 3, 3, 3, 0],
    [0, 3, 3, 3, 3, 0, 3],
    [0, 3, 3, 3, 3, 0, 3],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 0, 0, 3, 0, 0, 3],
    [0, 3, 3, 3, 0, 3, 0],
    [0, 3, 0, 0, 0, 3, 3],
    [0, 3, 0, 0, 3, 3, 0],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 3, 0, 0, 3, 3, 0],
    [0, 0, 3, 0, 0, 3, 3],
    [0, 0, 0, 3, 0, 3, 0],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 3, 3, 3, 0, 0, 3],
    [0, 3, 3, 3, 0, 0, 3],
    [0, 0, 0, 3, 0, 0, 3],
    [0, 3, 0, 0, 0, 3, 3],
    [0, 0, 0, 3, 0, 5, 0],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 1, 3, 1, 0, 1],
    [0, 0, 1, 3, 1, 0, 1],
    [0, 0, 3, 0, 3, 0, 3],
    [0, 0, 3, 0, 3, 0, 3],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 0, 3, 0, 0, 3, 3],
    [0, 0, 0, 3, 0, 3, 0],
    [0, 3, 0, 0, 3, 3, 0],
    [0, 3, 3, 3, 3, 3, 0],
    [0, 0, 0, 3, 0, 5, 0],
    [0, 3, 3, 3, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 1],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 3, 0, 5, 0],
    [0, 5, 0, 0, 5, 5, 0],
    [0, 0, 3, 0, 0, 3, 3],
    [0, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 3, 0, 3, 0],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 3, 3, 3, 0, 0, 3],
    [0, 5, 0, 0, 5, 5, 0],
    [0, 0, 1, 3, 1, 0, 1],
    [0, 3, 3, 3, 0, 0, 3],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 1, 3, 1, 0, 1],
    [0, 3, 3, 3, 3, 3, 0],
    [0, 0, 0, 0, 0, 0, 1],
    [0, 0, 1, 0, 3, 5, 1],
    [0, 0, 3, 0, 5, 2, 0],
    [0, 5, 0, 0, 5, 5, 0],
    [0, 0, 1, 0, 4, 5, 1],
    [0, 3, 3, 3, 0, 0, 0],
    [0, 0, 0, 3, 0, 5, 0],
    [0, 0, 0, 3, 0, 5, 0],
    [0, 0, 1, 0, 2, 5, 1],
    [0, 0, 0, 0, 0, 0, 1],
    [0, 0, 1, 3, 1, 0, 1],
    [0, 5, 0, 0, 5, 5, 0],
    [0, 0, 1, 0, 3, 4, 2],
    [0, 0, 1, 0, 0, 5, 1],
    [0, 0, 0, 0, 0, 0, 1],
    [0, 5, 0, 0, 5, 5, 0],
    [0, 0, 1, 0, 1, 5, 1],
];

// -----------------------------------------------------------------------------

/// One of the 122 base cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct BaseCell(u8);

impl BaseCell {
    /// Initializes a new base cell using a value that may be out of range.
    ///
    /// # Safety
    ///
    /// The value must be a valid base cell.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= MAX, "base cell out of range");
        Self(value)
    }

    /// Returns true if the base cell is pentagonal.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::BaseCell;
    ///
    /// assert!(BaseCell::try_from(4)?.is_pentagon());
    /// assert!(!BaseCell::try_from(8)?.is_pentagon());
    /// # Ok::<(), hexring::error::InvalidBaseCell>(())
    /// ```
    #[must_use]
    pub const fn is_pentagon(self) -> bool {
        BASE_PENTAGONS & (1 << self.0) != 0
    }

    /// Returns the total number of base cells.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::BaseCell;
    ///
    /// assert_eq!(BaseCell::count(), 122);
    /// ```
    #[must_use]
    pub const fn count() -> u8 {
        MAX + 1
    }

    /// Returns all the base cell.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::BaseCell;
    ///
    /// let cells = BaseCell::iter().collect::<Vec<_>>();
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::count()).map(Self::new_unchecked)
    }

    /// Returns true if, on the given face, this pentagon's missing
    /// sub-sequence runs clockwise instead of the default counterclockwise.
    ///
    /// Always `false` for non-pentagon base cells.
    #[must_use]
    pub(crate) fn is_cw_offset(self, face: Face) -> bool {
        let face = i8::try_from(u8::from(face)).expect("face < 20");
        let (cw0, cw1) = BASE_CELL_DATA[usize::from(self.0)].cw_offset_faces;
        cw0 == face || cw1 == face
    }

    /// Returns true for the two polar pentagons, which have an `I` neighbor
    /// in every non-center direction.
    #[must_use]
    pub(crate) const fn is_polar_pentagon(self) -> bool {
        self.0 == 4 || self.0 == 117
    }

    /// Returns the neighboring base cell in the given direction, or `None`
    /// if this base cell is a pentagon and has no neighbor there (the
    /// deleted `K` axe sub-sequence).
    #[must_use]
    pub(crate) fn neighbor(self, direction: Direction) -> Option<Self> {
        let value =
            BASE_CELL_NEIGHBORS[usize::from(self.0)][usize::from(u8::from(direction))];

        (value != INVALID).then(|| Self(value))
    }

    /// Returns the number of 60° CCW rotations to apply to align with the
    /// coordinate system of the neighbor in the given direction.
    #[must_use]
    pub(crate) fn neighbor_rotation(self, direction: Direction) -> u8 {
        BASE_CELL_NEIGHBOR_ROTATIONS[usize::from(self.0)]
            [usize::from(u8::from(direction))]
    }

    /// Returns the direction from this base cell to the given neighboring
    /// base cell, if they are indeed neighbors.
    #[must_use]
    pub(crate) fn direction(self, other: Self) -> Option<Direction> {
        (0..=6).find_map(|value| {
            // SAFETY: loop bound is 6, which is a valid direction value.
            let direction = Direction::new_unchecked(value);
            (self.neighbor(direction) == Some(other)).then_some(direction)
        })
    }
}

impl From<BaseCell> for FaceIJK {
    fn from(value: BaseCell) -> Self {
        let info = &BASE_CELL_DATA[usize::from(value.0)];
        let (i, j, k) = info.coord;
        Self::new(
            Face::new_unchecked(usize::from(info.face)),
            CoordIJK::new(i, j, k),
        )
    }
}

impl TryFrom<u8> for BaseCell {
    type Error = error::InvalidBaseCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX {
            return Err(Self::Error::new(value, "out of range"));
        }
        Ok(Self(value))
    }
}

impl From<BaseCell> for u8 {
    fn from(value: BaseCell) -> Self {
        value.0
    }
}

impl From<BaseCell> for usize {
    fn from(value: BaseCell) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for BaseCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
