// tests/core/mod.rs

#[cfg(test)]
mod crypto;
#[cfg(test)]
mod file;
#[cfg(test)]
mod request_list;
