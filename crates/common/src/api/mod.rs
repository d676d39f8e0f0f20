pub mod documents;
pub mod geojson;
