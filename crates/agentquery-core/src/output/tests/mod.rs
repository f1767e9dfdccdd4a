mod compact_tests;
