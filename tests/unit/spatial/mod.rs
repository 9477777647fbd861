mod direction;
