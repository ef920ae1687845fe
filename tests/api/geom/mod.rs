mod geometrycollection;
mod json;
mod line;
mod linestring;
mod multipoint;
mod multipolygon;
mod plotter;
mod rect;
mod solvent;
mod tiler;
mod to_cells;
mod triangle;
mod utils;
