mod blacklist_test;
mod register_test;
mod verification_test;
