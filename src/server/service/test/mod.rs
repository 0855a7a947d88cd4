mod backup;
mod catalog;
mod collection;
