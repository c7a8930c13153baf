//! Tests for the exif module



#[cfg(test)]
mod value_tests;


#[cfg(test)]
mod reader_tests;

#[cfg(test)]
mod tags_tests;
