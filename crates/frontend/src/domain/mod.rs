pub mod a001_material;
