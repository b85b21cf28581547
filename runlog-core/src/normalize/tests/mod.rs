mod fill_tests;
