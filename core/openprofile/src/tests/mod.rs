mod support;

mod list_profiles_tests;
