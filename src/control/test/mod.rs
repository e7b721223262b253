mod sweep_test;
