mod tests_ascii;
