/// UI layer: panel widgets and the central chart.

pub mod panels;
pub mod plot;
