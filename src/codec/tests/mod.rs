mod abi_encoding_tests;
