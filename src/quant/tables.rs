//! Sigmoid and tanh lookup tables over `[-8, 8]` in steps of 1/64, values at scale 14.
//!
//! Generated offline; `activation::tests` regenerates them in floating point and compares.
use super::activation::TABLE_LEN;
use super::fixed::Q15;

/// `round(sigmoid(i / 64 - 8) * 2^14)`
pub static SIGMOID_TABLE: [Q15; TABLE_LEN] = [
    5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8, 8, 9, 9, 9, 9,
    9, 9, 9, 9, 10, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11,
    12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 15,
    15, 15, 15, 16, 16, 16, 16, 17, 17, 17, 17, 18, 18, 18, 19, 19,
    19, 19, 20, 20, 20, 21, 21, 21, 22, 22, 22, 23, 23, 23, 24, 24,
    25, 25, 25, 26, 26, 27, 27, 27, 28, 28, 29, 29, 30, 30, 31, 31,
    32, 32, 33, 33, 34, 34, 35, 35, 36, 36, 37, 37, 38, 39, 39, 40,
    41, 41, 42, 42, 43, 44, 44, 45, 46, 47, 47, 48, 49, 50, 50, 51,
    52, 53, 54, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66,
    67, 68, 69, 70, 71, 72, 73, 74, 76, 77, 78, 79, 80, 82, 83, 84,
    86, 87, 88, 90, 91, 92, 94, 95, 97, 98, 100, 101, 103, 105, 106, 108,
    110, 111, 113, 115, 117, 119, 120, 122, 124, 126, 128, 130, 132, 134, 136, 138,
    141, 143, 145, 147, 150, 152, 154, 157, 159, 162, 164, 167, 169, 172, 175, 177,
    180, 183, 186, 189, 191, 194, 197, 201, 204, 207, 210, 213, 217, 220, 223, 227,
    230, 234, 238, 241, 245, 249, 253, 257, 261, 265, 269, 273, 277, 281, 286, 290,
    295, 299, 304, 309, 313, 318, 323, 328, 333, 338, 343, 349, 354, 360, 365, 371,
    376, 382, 388, 394, 400, 406, 413, 419, 425, 432, 438, 445, 452, 459, 466, 473,
    480, 488, 495, 503, 510, 518, 526, 534, 542, 550, 559, 567, 576, 585, 593, 602,
    612, 621, 630, 640, 649, 659, 669, 679, 690, 700, 711, 721, 732, 743, 754, 766,
    777, 789, 800, 812, 825, 837, 849, 862, 875, 888, 901, 915, 928, 942, 956, 970,
    984, 999, 1014, 1029, 1044, 1059, 1075, 1091, 1107, 1123, 1139, 1156, 1173, 1190, 1207, 1225,
    1243, 1261, 1279, 1298, 1317, 1336, 1355, 1374, 1394, 1414, 1435, 1455, 1476, 1497, 1519, 1540,
    1562, 1584, 1607, 1630, 1653, 1676, 1700, 1724, 1748, 1773, 1797, 1823, 1848, 1874, 1900, 1926,
    1953, 1980, 2007, 2035, 2063, 2091, 2120, 2149, 2178, 2208, 2238, 2269, 2299, 2330, 2362, 2393,
    2426, 2458, 2491, 2524, 2558, 2592, 2626, 2660, 2695, 2731, 2767, 2803, 2839, 2876, 2913, 2951,
    2989, 3027, 3066, 3105, 3145, 3185, 3225, 3265, 3307, 3348, 3390, 3432, 3475, 3518, 3561, 3605,
    3649, 3693, 3738, 3783, 3829, 3875, 3921, 3968, 4015, 4063, 4111, 4159, 4208, 4257, 4306, 4356,
    4406, 4457, 4508, 4559, 4611, 4662, 4715, 4767, 4820, 4874, 4927, 4981, 5036, 5090, 5145, 5201,
    5256, 5312, 5369, 5425, 5482, 5539, 5596, 5654, 5712, 5770, 5829, 5888, 5947, 6006, 6066, 6126,
    6186, 6246, 6306, 6367, 6428, 6489, 6551, 6612, 6674, 6736, 6798, 6860, 6922, 6985, 7048, 7110,
    7173, 7236, 7300, 7363, 7426, 7490, 7553, 7617, 7681, 7744, 7808, 7872, 7936, 8000, 8064, 8128,
    8192, 8256, 8320, 8384, 8448, 8512, 8576, 8640, 8703, 8767, 8831, 8894, 8958, 9021, 9084, 9148,
    9211, 9274, 9336, 9399, 9462, 9524, 9586, 9648, 9710, 9772, 9833, 9895, 9956, 10017, 10078, 10138,
    10198, 10258, 10318, 10378, 10437, 10496, 10555, 10614, 10672, 10730, 10788, 10845, 10902, 10959, 11015, 11072,
    11128, 11183, 11239, 11294, 11348, 11403, 11457, 11510, 11564, 11617, 11669, 11722, 11773, 11825, 11876, 11927,
    11978, 12028, 12078, 12127, 12176, 12225, 12273, 12321, 12369, 12416, 12463, 12509, 12555, 12601, 12646, 12691,
    12735, 12779, 12823, 12866, 12909, 12952, 12994, 13036, 13077, 13119, 13159, 13199, 13239, 13279, 13318, 13357,
    13395, 13433, 13471, 13508, 13545, 13581, 13617, 13653, 13689, 13724, 13758, 13792, 13826, 13860, 13893, 13926,
    13958, 13991, 14022, 14054, 14085, 14115, 14146, 14176, 14206, 14235, 14264, 14293, 14321, 14349, 14377, 14404,
    14431, 14458, 14484, 14510, 14536, 14561, 14587, 14611, 14636, 14660, 14684, 14708, 14731, 14754, 14777, 14800,
    14822, 14844, 14865, 14887, 14908, 14929, 14949, 14970, 14990, 15010, 15029, 15048, 15067, 15086, 15105, 15123,
    15141, 15159, 15177, 15194, 15211, 15228, 15245, 15261, 15277, 15293, 15309, 15325, 15340, 15355, 15370, 15385,
    15400, 15414, 15428, 15442, 15456, 15469, 15483, 15496, 15509, 15522, 15535, 15547, 15559, 15572, 15584, 15595,
    15607, 15618, 15630, 15641, 15652, 15663, 15673, 15684, 15694, 15705, 15715, 15725, 15735, 15744, 15754, 15763,
    15772, 15782, 15791, 15799, 15808, 15817, 15825, 15834, 15842, 15850, 15858, 15866, 15874, 15881, 15889, 15896,
    15904, 15911, 15918, 15925, 15932, 15939, 15946, 15952, 15959, 15965, 15971, 15978, 15984, 15990, 15996, 16002,
    16008, 16013, 16019, 16024, 16030, 16035, 16041, 16046, 16051, 16056, 16061, 16066, 16071, 16075, 16080, 16085,
    16089, 16094, 16098, 16103, 16107, 16111, 16115, 16119, 16123, 16127, 16131, 16135, 16139, 16143, 16146, 16150,
    16154, 16157, 16161, 16164, 16167, 16171, 16174, 16177, 16180, 16183, 16187, 16190, 16193, 16195, 16198, 16201,
    16204, 16207, 16209, 16212, 16215, 16217, 16220, 16222, 16225, 16227, 16230, 16232, 16234, 16237, 16239, 16241,
    16243, 16246, 16248, 16250, 16252, 16254, 16256, 16258, 16260, 16262, 16264, 16265, 16267, 16269, 16271, 16273,
    16274, 16276, 16278, 16279, 16281, 16283, 16284, 16286, 16287, 16289, 16290, 16292, 16293, 16294, 16296, 16297,
    16298, 16300, 16301, 16302, 16304, 16305, 16306, 16307, 16308, 16310, 16311, 16312, 16313, 16314, 16315, 16316,
    16317, 16318, 16319, 16320, 16321, 16322, 16323, 16324, 16325, 16326, 16327, 16328, 16329, 16330, 16330, 16331,
    16332, 16333, 16334, 16334, 16335, 16336, 16337, 16337, 16338, 16339, 16340, 16340, 16341, 16342, 16342, 16343,
    16343, 16344, 16345, 16345, 16346, 16347, 16347, 16348, 16348, 16349, 16349, 16350, 16350, 16351, 16351, 16352,
    16352, 16353, 16353, 16354, 16354, 16355, 16355, 16356, 16356, 16357, 16357, 16357, 16358, 16358, 16359, 16359,
    16359, 16360, 16360, 16361, 16361, 16361, 16362, 16362, 16362, 16363, 16363, 16363, 16364, 16364, 16364, 16365,
    16365, 16365, 16365, 16366, 16366, 16366, 16367, 16367, 16367, 16367, 16368, 16368, 16368, 16368, 16369, 16369,
    16369, 16369, 16370, 16370, 16370, 16370, 16370, 16371, 16371, 16371, 16371, 16371, 16372, 16372, 16372, 16372,
    16372, 16373, 16373, 16373, 16373, 16373, 16373, 16374, 16374, 16374, 16374, 16374, 16374, 16375, 16375, 16375,
    16375, 16375, 16375, 16375, 16375, 16376, 16376, 16376, 16376, 16376, 16376, 16376, 16376, 16377, 16377, 16377,
    16377, 16377, 16377, 16377, 16377, 16377, 16378, 16378, 16378, 16378, 16378, 16378, 16378, 16378, 16378, 16378,
    16379,
];

/// `round(tanh(i / 64 - 8) * 2^14)`
pub static TANH_TABLE: [Q15; TABLE_LEN] = [
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384,
    -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16384, -16383, -16383,
    -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383,
    -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383, -16383,
    -16383, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382, -16382,
    -16382, -16381, -16381, -16381, -16381, -16381, -16381, -16381, -16381, -16381, -16381, -16381, -16380, -16380, -16380, -16380,
    -16380, -16380, -16380, -16380, -16379, -16379, -16379, -16379, -16379, -16379, -16378, -16378, -16378, -16378, -16378, -16378,
    -16377, -16377, -16377, -16377, -16376, -16376, -16376, -16376, -16375, -16375, -16375, -16375, -16374, -16374, -16374, -16373,
    -16373, -16373, -16372, -16372, -16372, -16371, -16371, -16370, -16370, -16369, -16369, -16369, -16368, -16368, -16367, -16366,
    -16366, -16365, -16365, -16364, -16363, -16363, -16362, -16361, -16361, -16360, -16359, -16358, -16358, -16357, -16356, -16355,
    -16354, -16353, -16352, -16351, -16350, -16349, -16348, -16347, -16346, -16344, -16343, -16342, -16341, -16339, -16338, -16336,
    -16335, -16333, -16332, -16330, -16328, -16327, -16325, -16323, -16321, -16319, -16317, -16315, -16312, -16310, -16308, -16305,
    -16303, -16300, -16298, -16295, -16292, -16289, -16286, -16283, -16280, -16277, -16273, -16270, -16266, -16263, -16259, -16255,
    -16251, -16246, -16242, -16238, -16233, -16228, -16223, -16218, -16213, -16208, -16202, -16196, -16190, -16184, -16178, -16171,
    -16165, -16158, -16151, -16143, -16136, -16128, -16120, -16112, -16103, -16094, -16085, -16076, -16066, -16056, -16046, -16035,
    -16024, -16013, -16001, -15989, -15977, -15964, -15951, -15937, -15923, -15909, -15894, -15879, -15863, -15847, -15830, -15812,
    -15795, -15776, -15757, -15738, -15718, -15697, -15676, -15654, -15631, -15608, -15584, -15559, -15533, -15507, -15480, -15452,
    -15423, -15394, -15363, -15332, -15300, -15267, -15232, -15197, -15161, -15124, -15085, -15046, -15005, -14963, -14920, -14876,
    -14830, -14783, -14735, -14685, -14634, -14582, -14528, -14472, -14415, -14356, -14296, -14234, -14171, -14105, -14038, -13969,
    -13898, -13826, -13751, -13674, -13595, -13515, -13432, -13347, -13260, -13170, -13078, -12984, -12888, -12789, -12688, -12584,
    -12478, -12369, -12258, -12144, -12027, -11908, -11785, -11661, -11533, -11402, -11269, -11132, -10993, -10851, -10706, -10557,
    -10406, -10252, -10095, -9934, -9771, -9604, -9435, -9262, -9087, -8908, -8726, -8541, -8353, -8162, -7968, -7771,
    -7571, -7369, -7163, -6954, -6743, -6529, -6312, -6093, -5871, -5647, -5420, -5191, -4960, -4726, -4490, -4252,
    -4013, -3771, -3528, -3283, -3036, -2789, -2539, -2289, -2037, -1785, -1532, -1277, -1023, -767, -512, -256,
    0, 256, 512, 767, 1023, 1277, 1532, 1785, 2037, 2289, 2539, 2789, 3036, 3283, 3528, 3771,
    4013, 4252, 4490, 4726, 4960, 5191, 5420, 5647, 5871, 6093, 6312, 6529, 6743, 6954, 7163, 7369,
    7571, 7771, 7968, 8162, 8353, 8541, 8726, 8908, 9087, 9262, 9435, 9604, 9771, 9934, 10095, 10252,
    10406, 10557, 10706, 10851, 10993, 11132, 11269, 11402, 11533, 11661, 11785, 11908, 12027, 12144, 12258, 12369,
    12478, 12584, 12688, 12789, 12888, 12984, 13078, 13170, 13260, 13347, 13432, 13515, 13595, 13674, 13751, 13826,
    13898, 13969, 14038, 14105, 14171, 14234, 14296, 14356, 14415, 14472, 14528, 14582, 14634, 14685, 14735, 14783,
    14830, 14876, 14920, 14963, 15005, 15046, 15085, 15124, 15161, 15197, 15232, 15267, 15300, 15332, 15363, 15394,
    15423, 15452, 15480, 15507, 15533, 15559, 15584, 15608, 15631, 15654, 15676, 15697, 15718, 15738, 15757, 15776,
    15795, 15812, 15830, 15847, 15863, 15879, 15894, 15909, 15923, 15937, 15951, 15964, 15977, 15989, 16001, 16013,
    16024, 16035, 16046, 16056, 16066, 16076, 16085, 16094, 16103, 16112, 16120, 16128, 16136, 16143, 16151, 16158,
    16165, 16171, 16178, 16184, 16190, 16196, 16202, 16208, 16213, 16218, 16223, 16228, 16233, 16238, 16242, 16246,
    16251, 16255, 16259, 16263, 16266, 16270, 16273, 16277, 16280, 16283, 16286, 16289, 16292, 16295, 16298, 16300,
    16303, 16305, 16308, 16310, 16312, 16315, 16317, 16319, 16321, 16323, 16325, 16327, 16328, 16330, 16332, 16333,
    16335, 16336, 16338, 16339, 16341, 16342, 16343, 16344, 16346, 16347, 16348, 16349, 16350, 16351, 16352, 16353,
    16354, 16355, 16356, 16357, 16358, 16358, 16359, 16360, 16361, 16361, 16362, 16363, 16363, 16364, 16365, 16365,
    16366, 16366, 16367, 16368, 16368, 16369, 16369, 16369, 16370, 16370, 16371, 16371, 16372, 16372, 16372, 16373,
    16373, 16373, 16374, 16374, 16374, 16375, 16375, 16375, 16375, 16376, 16376, 16376, 16376, 16377, 16377, 16377,
    16377, 16378, 16378, 16378, 16378, 16378, 16378, 16379, 16379, 16379, 16379, 16379, 16379, 16380, 16380, 16380,
    16380, 16380, 16380, 16380, 16380, 16381, 16381, 16381, 16381, 16381, 16381, 16381, 16381, 16381, 16381, 16381,
    16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382, 16382,
    16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383,
    16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383, 16383,
    16383, 16383, 16383, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384, 16384,
    16384,
];
