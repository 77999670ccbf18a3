pub mod a001_person;
