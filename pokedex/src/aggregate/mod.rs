mod detail;
mod evolution;
mod localized;
mod page;
mod species;
mod view;
