#[cfg(test)]
mod common;

#[cfg(test)]
mod appointment_list_tests;

#[cfg(test)]
mod appointment_update_tests;
